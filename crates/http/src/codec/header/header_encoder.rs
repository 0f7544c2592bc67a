//! HTTP header encoder implementation for serializing response heads
//!
//! The output is byte-exact:
//!
//! ```text
//! HTTP/1.1 <code> <reason>\r\n
//! Content-Type: <mime>\r\n        (when the response has a body)
//! Content-Length: <n>\r\n         (when the response has a body)
//! Content-Encoding: <coding>\r\n  (when the body was compressed)
//! Connection: close\r\n           (when the response closes the connection)
//! \r\n
//! ```
//!
//! A status-only response is therefore just its status line followed by an
//! empty line, e.g. `HTTP/1.1 404 Not Found\r\n\r\n`.

use crate::protocol::{Response, SendError};

use bytes::{BufMut, BytesMut};

use std::io;
use std::io::{ErrorKind, Write};
use tokio_util::codec::Encoder;
use tracing::error;

/// Initial buffer size allocated for header serialization
const INIT_HEADER_SIZE: usize = 256;

/// Encoder for the status line and header fields of a [`Response`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderEncoder;

impl<'a> Encoder<&'a Response> for HeaderEncoder {
    type Error = SendError;

    /// Encodes the response head into the provided bytes buffer.
    ///
    /// # Errors
    ///
    /// Returns error if the status code has no canonical reason phrase
    fn encode(&mut self, response: &'a Response, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(INIT_HEADER_SIZE);

        let status = response.status_code();
        let Some(reason) = status.canonical_reason() else {
            error!(status = status.as_u16(), "status code without reason phrase");
            return Err(io::Error::from(ErrorKind::InvalidInput).into());
        };
        write!(FastWrite(dst), "HTTP/1.1 {} {}\r\n", status.as_str(), reason)?;

        if let Some(content_type) = response.content_type() {
            write!(FastWrite(dst), "Content-Type: {content_type}\r\n")?;
        }

        if response.content_type().is_some() || !response.body().is_empty() {
            write!(FastWrite(dst), "Content-Length: {}\r\n", response.body().len())?;
        }

        if let Some(coding) = response.content_encoding() {
            write!(FastWrite(dst), "Content-Encoding: {coding}\r\n")?;
        }

        if response.is_close() {
            dst.put_slice(b"Connection: close\r\n");
        }

        dst.put_slice(b"\r\n");
        Ok(())
    }
}

/// Fast writer implementation for writing to `BytesMut`.
///
/// Lets `write!` format straight into the destination buffer.
struct FastWrite<'a>(&'a mut BytesMut);

impl Write for FastWrite<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.put_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
