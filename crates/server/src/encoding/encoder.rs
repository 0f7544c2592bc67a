use crate::encoding::Writer;
use bare_http::protocol::ContentCoding;
use bytes::Bytes;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io;
use std::io::Write;
use tracing::trace;

/// A body after negotiation, together with the coding applied to it (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub coding: Option<ContentCoding>,
    pub body: Bytes,
}

/// Represents the content encodings the server can apply.
enum Encoder {
    /// Gzip encoding.
    Gzip(GzEncoder<Writer>),
}

impl Encoder {
    /// Creates a new Gzip encoder.
    fn gzip() -> Self {
        Self::Gzip(GzEncoder::new(Writer::new(), Compression::default()))
    }

    /// Picks the encoder for the first accepted coding.
    fn select(accepted: &[ContentCoding]) -> Option<Self> {
        accepted.first().map(|coding| match coding {
            ContentCoding::Gzip => Self::gzip(),
        })
    }

    fn coding(&self) -> ContentCoding {
        match self {
            Encoder::Gzip(_) => ContentCoding::Gzip,
        }
    }

    /// Writes data to the encoder.
    fn write(&mut self, data: &[u8]) -> Result<(), io::Error> {
        match self {
            Self::Gzip(encoder) => encoder.write_all(data).inspect_err(|err| trace!("Error encoding gzip encoding: {}", err)),
        }
    }

    /// Finishes the encoding process and returns the encoded data.
    fn finish(self) -> Result<Bytes, io::Error> {
        match self {
            Self::Gzip(encoder) => encoder.finish().map(Writer::into_bytes),
        }
    }
}

/// Compresses `body` with the first coding in `accepted`.
///
/// When `accepted` is empty the body is returned unchanged and no coding is
/// recorded, so no `Content-Encoding` header should be sent.
///
/// # Errors
///
/// Returns the compressor's I/O error when writing or finishing fails.
pub fn encode_body(accepted: &[ContentCoding], body: Bytes) -> Result<Encoded, io::Error> {
    let Some(mut encoder) = Encoder::select(accepted) else {
        return Ok(Encoded { coding: None, body });
    };

    let coding = encoder.coding();
    encoder.write(&body)?;
    let body = encoder.finish()?;
    trace!(%coding, encoded_size = body.len(), "encoded response body");

    Ok(Encoded { coding: Some(coding), body })
}
