//! HTTP request representation.
//!
//! A request is decoded in three steps and each step produces its own value:
//! the [`RequestLine`], the [`RequestHeaders`] record and the body bytes. The
//! three are assembled into a [`Request`] once the body is complete.

use bytes::Bytes;
use http::Method;

use crate::protocol::{ContentCoding, ParseError};

/// The first line of a request: `METHOD PATH VERSION`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    method: Method,
    path: String,
    version: String,
}

impl RequestLine {
    pub fn new(method: Method, path: impl Into<String>, version: impl Into<String>) -> Self {
        Self { method, path: path.into(), version: version.into() }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The protocol version token as sent, empty when the client omitted it.
    pub fn version(&self) -> &str {
        &self.version
    }
}

/// The header fields this server understands.
///
/// Any other header is dropped while parsing. `Accept-Encoding` only keeps the
/// tokens that map to a [`ContentCoding`], in the order the client sent them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    host: Option<String>,
    user_agent: Option<String>,
    accept: Option<String>,
    content_type: Option<String>,
    content_length: Option<String>,
    connection: Option<String>,
    accept_encoding: Vec<ContentCoding>,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one header field, name and value already trimmed.
    ///
    /// Names are compared case-insensitively. Returns `false` when the name is
    /// not one of the recognized headers and nothing was stored.
    pub fn insert(&mut self, name: &str, value: &str) -> bool {
        let slot = match name.to_ascii_lowercase().as_str() {
            "host" => &mut self.host,
            "user-agent" => &mut self.user_agent,
            "accept" => &mut self.accept,
            "content-type" => &mut self.content_type,
            "content-length" => &mut self.content_length,
            "connection" => &mut self.connection,
            "accept-encoding" => {
                self.accept_encoding.extend(value.split(',').map(str::trim).filter_map(ContentCoding::from_token));
                return true;
            }
            _ => return false,
        };
        *slot = Some(value.to_owned());
        true
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn accept(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn connection(&self) -> Option<&str> {
        self.connection.as_deref()
    }

    pub fn accept_encoding(&self) -> &[ContentCoding] {
        &self.accept_encoding
    }

    /// The raw `Content-Length` value, if the client sent one.
    pub fn raw_content_length(&self) -> Option<&str> {
        self.content_length.as_deref()
    }

    /// Body length announced by the client, zero when absent or empty.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidContentLength`] when the value is not a
    /// non-negative decimal integer.
    pub fn content_length(&self) -> Result<u64, ParseError> {
        match self.content_length.as_deref() {
            None | Some("") => Ok(0),
            Some(value) => value
                .parse::<u64>()
                .map_err(|e| ParseError::invalid_content_length(format!("value {value} is not u64: {e}"))),
        }
    }

    /// `true` when the client sent `Connection: close`.
    pub fn is_close(&self) -> bool {
        self.connection.as_deref() == Some("close")
    }
}

/// A fully received request.
#[derive(Debug, Clone)]
pub struct Request {
    line: RequestLine,
    headers: RequestHeaders,
    body: Bytes,
}

impl Request {
    pub fn new(line: RequestLine, headers: RequestHeaders, body: Bytes) -> Self {
        Self { line, headers, body }
    }

    pub fn method(&self) -> &Method {
        self.line.method()
    }

    pub fn path(&self) -> &str {
        self.line.path()
    }

    pub fn headers(&self) -> &RequestHeaders {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}
