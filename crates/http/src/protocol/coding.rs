//! Content codings the server knows how to produce.

use std::fmt;

/// A supported `Content-Encoding` token.
///
/// Only tokens with a variant here survive header parsing; everything else a
/// client lists in `Accept-Encoding` is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentCoding {
    Gzip,
}

impl ContentCoding {
    /// Looks up an already trimmed token, returns `None` for unsupported ones.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "gzip" => Some(Self::Gzip),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
        }
    }
}

impl fmt::Display for ContentCoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
