//! Request line decoder.
//!
//! The request line is split on single spaces. The first token is the method,
//! the second the request target, and the third (optional) the protocol
//! version. Fewer than two tokens is a bad request.

use bytes::BytesMut;
use http::Method;
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::codec::line::{strip_line_ending, take_line};
use crate::protocol::{ParseError, RequestLine};

/// Maximum size in bytes of a request line, terminator included
const MAX_REQUEST_LINE_BYTES: usize = 8 * 1024;

#[derive(Debug, Default, Clone, Copy)]
pub struct RequestLineDecoder;

impl Decoder for RequestLineDecoder {
    type Item = RequestLine;
    type Error = ParseError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let Some(line) = take_line(src, MAX_REQUEST_LINE_BYTES)? else {
            return Ok(None);
        };

        parse_request_line(strip_line_ending(&line)).map(Some)
    }
}

fn parse_request_line(line: &[u8]) -> Result<RequestLine, ParseError> {
    let line = std::str::from_utf8(line).map_err(|e| ParseError::invalid_request_line(format!("not utf-8: {e}")))?;
    trace!(request_line = line, "decoding request line");

    let mut tokens = line.splitn(3, ' ');
    let (Some(method), Some(path)) = (tokens.next(), tokens.next()) else {
        return Err(ParseError::invalid_request_line(format!("missing method or path in {line:?}")));
    };
    let version = tokens.next().unwrap_or_default();

    let method =
        Method::from_bytes(method.as_bytes()).map_err(|e| ParseError::invalid_request_line(format!("method {method:?}: {e}")))?;

    Ok(RequestLine::new(method, path, version))
}
