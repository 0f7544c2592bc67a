//! HTTP request decoder module
//!
//! This module decodes whole requests from a byte stream with a small state
//! machine, one state per part of the request:
//!
//! ```text
//! AwaitingRequestLine ──▶ ParsingHeaders ──▶ ReadingBody ──▶ (request complete)
//!          ▲                     │                                │
//!          └─────────────────────┴──── Content-Length absent ◀────┘
//! ```
//!
//! # Example
//!
//! ```
//! use bare_http::codec::RequestDecoder;
//! use bytes::BytesMut;
//! use tokio_util::codec::Decoder;
//!
//! let mut decoder = RequestDecoder::new();
//! let mut buffer = BytesMut::from("POST /files/a HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello");
//! let request = decoder.decode(&mut buffer).unwrap().unwrap();
//! assert_eq!(request.path(), "/files/a");
//! assert_eq!(&request.body()[..], b"hello");
//! ```

use std::mem;

use crate::codec::body::LengthDecoder;
use crate::codec::header::HeaderDecoder;
use crate::codec::request_line::RequestLineDecoder;
use crate::protocol::{ParseError, Request, RequestHeaders, RequestLine};
use bytes::{Bytes, BytesMut};
use tokio_util::codec::Decoder;
use tracing::trace;

/// Where the decoder currently is inside a request
#[derive(Debug, Default)]
enum State {
    #[default]
    AwaitingRequestLine,
    ParsingHeaders(RequestLine),
    ReadingBody(RequestLine, RequestHeaders, LengthDecoder),
}

impl State {
    fn stage(&self) -> &'static str {
        match self {
            State::AwaitingRequestLine => "request line",
            State::ParsingHeaders(_) => "request headers",
            State::ReadingBody(..) => "request body",
        }
    }
}

/// A decoder producing one complete [`Request`] at a time
///
/// Requests on a persistent connection are decoded back to back: after a
/// request is handed out the decoder waits for the next request line.
#[derive(Debug, Default)]
pub struct RequestDecoder {
    request_line_decoder: RequestLineDecoder,
    header_decoder: HeaderDecoder,
    state: State,
}

impl RequestDecoder {
    /// Creates a new `RequestDecoder` instance
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while no byte of the next request has been consumed
    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::AwaitingRequestLine)
    }
}

impl Decoder for RequestDecoder {
    type Item = Request;
    type Error = ParseError;

    /// Attempts to decode a request from the provided buffer
    ///
    /// # Returns
    ///
    /// - `Ok(Some(request))`: the request line, headers and body are complete
    /// - `Ok(None)`: Need more data to proceed
    /// - `Err(_)`: Encountered a parsing error
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            self.state = match mem::take(&mut self.state) {
                State::AwaitingRequestLine => match self.request_line_decoder.decode(src)? {
                    Some(line) => State::ParsingHeaders(line),
                    None => return Ok(None),
                },

                State::ParsingHeaders(line) => match self.header_decoder.decode(src)? {
                    Some(headers) => {
                        let length = headers.content_length()?;
                        if length == 0 {
                            return Ok(Some(Request::new(line, headers, Bytes::new())));
                        }
                        trace!(length, "reading request body");
                        State::ReadingBody(line, headers, LengthDecoder::new(length))
                    }
                    None => {
                        self.state = State::ParsingHeaders(line);
                        return Ok(None);
                    }
                },

                State::ReadingBody(line, headers, mut body_decoder) => match body_decoder.decode(src)? {
                    Some(body) => return Ok(Some(Request::new(line, headers, body))),
                    None => {
                        self.state = State::ReadingBody(line, headers, body_decoder);
                        return Ok(None);
                    }
                },
            };
        }
    }

    /// Called once the peer has closed its side of the stream.
    ///
    /// A stream ending between two requests is a normal end of a persistent
    /// connection. A stream ending right after the header block, before any
    /// body byte, still yields the request with an empty body. Ending anywhere
    /// else inside a request is an error.
    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(buf)? {
            Some(request) => Ok(Some(request)),
            None if buf.is_empty() && self.is_idle() => Ok(None),
            None => match mem::take(&mut self.state) {
                State::ReadingBody(line, headers, _) if buf.is_empty() => {
                    trace!("stream ended before the request body, use an empty body");
                    Ok(Some(Request::new(line, headers, Bytes::new())))
                }
                state => {
                    self.header_decoder = HeaderDecoder::default();
                    buf.clear();
                    Err(ParseError::unexpected_eof(state.stage()))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ContentCoding;
    use http::Method;

    #[test]
    fn get_without_body() {
        let mut buf = BytesMut::from("GET /echo/abc HTTP/1.1\r\nHost: localhost:4221\r\nAccept-Encoding: gzip\r\n\r\n");
        let mut decoder = RequestDecoder::new();

        let request = decoder.decode(&mut buf).unwrap().unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.path(), "/echo/abc");
        assert_eq!(request.headers().host(), Some("localhost:4221"));
        assert_eq!(request.headers().accept_encoding(), &[ContentCoding::Gzip]);
        assert!(request.body().is_empty());
        assert!(decoder.is_idle());
        assert!(buf.is_empty());
    }

    #[test]
    fn post_with_body_in_pieces() {
        let mut decoder = RequestDecoder::new();
        let mut buf = BytesMut::new();

        let pieces: [&[u8]; 5] = [
            b"POST /files/number HTTP/1.1\r\n",
            b"Host: localhost:4221\r\nContent-Le",
            b"ngth: 11\r\nContent-Type: application/octet-stream\r\n\r\n",
            b"hello ",
            b"world",
        ];

        for piece in &pieces[..4] {
            buf.extend_from_slice(piece);
            assert!(decoder.decode(&mut buf).unwrap().is_none());
        }
        assert!(!decoder.is_idle());

        buf.extend_from_slice(pieces[4]);
        let request = decoder.decode(&mut buf).unwrap().unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.path(), "/files/number");
        assert_eq!(request.headers().content_type(), Some("application/octet-stream"));
        assert_eq!(&request.body()[..], b"hello world");
        assert!(decoder.is_idle());
    }

    #[test]
    fn back_to_back_requests() {
        let mut buf = BytesMut::from(
            "POST /files/a HTTP/1.1\r\nContent-Length: 3\r\n\r\nabcGET /user-agent HTTP/1.1\r\nUser-Agent: foobar/1.2.3\r\n\r\n",
        );
        let mut decoder = RequestDecoder::new();

        let first = decoder.decode(&mut buf).unwrap().unwrap();
        assert_eq!(&first.body()[..], b"abc");

        let second = decoder.decode(&mut buf).unwrap().unwrap();
        assert_eq!(second.path(), "/user-agent");
        assert_eq!(second.headers().user_agent(), Some("foobar/1.2.3"));

        assert!(decoder.decode(&mut buf).unwrap().is_none());
    }

    #[test]
    fn body_is_read_for_any_method() {
        let mut buf = BytesMut::from("GET /echo/x HTTP/1.1\r\nContent-Length: 2\r\n\r\nhi");
        let request = RequestDecoder::new().decode(&mut buf).unwrap().unwrap();
        assert_eq!(&request.body()[..], b"hi");
    }

    #[test]
    fn bad_request_line() {
        let mut buf = BytesMut::from("GET\r\n");
        let result = RequestDecoder::new().decode(&mut buf);

        let error = result.unwrap_err();
        assert!(error.is_bad_request());
    }

    #[test]
    fn invalid_content_length() {
        let mut buf = BytesMut::from("POST /files/a HTTP/1.1\r\nContent-Length: five\r\n\r\nfive!");
        let error = RequestDecoder::new().decode(&mut buf).unwrap_err();

        assert!(matches!(error, ParseError::InvalidContentLength { .. }));
        assert!(error.is_bad_request());
    }

    #[test]
    fn eof_between_requests() {
        let mut buf = BytesMut::new();
        assert!(RequestDecoder::new().decode_eof(&mut buf).unwrap().is_none());
    }

    #[test]
    fn eof_inside_request_line() {
        let mut buf = BytesMut::from("GET /echo");
        let error = RequestDecoder::new().decode_eof(&mut buf).unwrap_err();

        assert!(matches!(error, ParseError::UnexpectedEof { stage: "request line" }));
        assert!(!error.is_bad_request());
    }

    #[test]
    fn eof_inside_headers() {
        let mut buf = BytesMut::from("GET /echo/abc HTTP/1.1\r\nHost: localhost\r\n");
        let mut decoder = RequestDecoder::new();

        assert!(decoder.decode(&mut buf).unwrap().is_none());
        assert!(buf.is_empty());

        let error = decoder.decode_eof(&mut buf).unwrap_err();
        assert!(matches!(error, ParseError::UnexpectedEof { stage: "request headers" }));
    }

    #[test]
    fn eof_before_any_body_byte() {
        let mut buf = BytesMut::from("POST /files/a HTTP/1.1\r\nContent-Length: 5\r\n\r\n");
        let mut decoder = RequestDecoder::new();

        assert!(decoder.decode(&mut buf).unwrap().is_none());

        let request = decoder.decode_eof(&mut buf).unwrap().unwrap();
        assert_eq!(request.path(), "/files/a");
        assert_eq!(request.headers().content_length().unwrap(), 5);
        assert!(request.body().is_empty());
        assert!(decoder.is_idle());

        assert!(decoder.decode_eof(&mut buf).unwrap().is_none());
    }

    #[test]
    fn eof_inside_body() {
        let mut buf = BytesMut::from("POST /files/a HTTP/1.1\r\nContent-Length: 10\r\n\r\nshort");
        let mut decoder = RequestDecoder::new();

        assert!(decoder.decode(&mut buf).unwrap().is_none());

        let error = decoder.decode_eof(&mut buf).unwrap_err();
        assert!(matches!(error, ParseError::UnexpectedEof { stage: "request body" }));
        assert!(decoder.is_idle());
    }
}
