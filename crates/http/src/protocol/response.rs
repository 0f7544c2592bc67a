//! HTTP response representation.
//!
//! A [`Response`] owns the exact bytes that go on the wire as its body, so a
//! compressed body is stored here already compressed together with the
//! [`ContentCoding`] that produced it.

use bytes::Bytes;
use http::StatusCode;
use mime::Mime;

use crate::protocol::ContentCoding;

#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    content_type: Option<Mime>,
    content_encoding: Option<ContentCoding>,
    close: bool,
    body: Bytes,
}

impl Response {
    /// A status-line-only response without headers or body.
    pub fn status(status: StatusCode) -> Self {
        Self { status, content_type: None, content_encoding: None, close: false, body: Bytes::new() }
    }

    pub fn ok() -> Self {
        Self::status(StatusCode::OK)
    }

    pub fn created() -> Self {
        Self::status(StatusCode::CREATED)
    }

    pub fn not_found() -> Self {
        Self::status(StatusCode::NOT_FOUND)
    }

    pub fn internal_server_error() -> Self {
        Self::status(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Attaches a body. `Content-Type` and `Content-Length` are written for it.
    #[must_use]
    pub fn with_body(mut self, content_type: Mime, body: impl Into<Bytes>) -> Self {
        self.content_type = Some(content_type);
        self.body = body.into();
        self
    }

    /// Marks the body as already encoded with `coding`.
    #[must_use]
    pub fn with_content_encoding(mut self, coding: ContentCoding) -> Self {
        self.content_encoding = Some(coding);
        self
    }

    /// Emits `Connection: close` when `close` is set.
    #[must_use]
    pub fn with_close(mut self, close: bool) -> Self {
        self.close = close;
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> Option<&Mime> {
        self.content_type.as_ref()
    }

    pub fn content_encoding(&self) -> Option<ContentCoding> {
        self.content_encoding
    }

    pub fn is_close(&self) -> bool {
        self.close
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}
