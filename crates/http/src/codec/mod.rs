//! HTTP codec module for encoding and decoding HTTP messages
//!
//! This module provides the byte-level side of the protocol: turning the
//! incoming stream into [`Request`](crate::protocol::Request) values and
//! serializing [`Response`](crate::protocol::Response) values.
//!
//! # Architecture
//!
//! - Request handling:
//!   - [`RequestDecoder`]: Decodes incoming HTTP requests
//!   - [`RequestLineDecoder`]: Parses `METHOD PATH VERSION`
//!   - Header parsing via [`header`] module
//!   - Content-Length body framing via [`body`] module
//!
//! - Response handling:
//!   - [`ResponseEncoder`]: Encodes outgoing HTTP responses
//!   - Status line and header encoding via [`header`] module
//!
//! # Example
//!
//! ```
//! use bare_http::codec::{RequestDecoder, ResponseEncoder};
//! use bare_http::protocol::Response;
//! use tokio_util::codec::{Decoder, Encoder};
//! use bytes::BytesMut;
//!
//! // Decode incoming request
//! let mut decoder = RequestDecoder::new();
//! let mut request_buffer = BytesMut::from("GET / HTTP/1.1\r\n\r\n");
//! let request = decoder.decode(&mut request_buffer).unwrap().unwrap();
//! assert_eq!(request.path(), "/");
//!
//! // Encode outgoing response
//! let mut encoder = ResponseEncoder::new();
//! let mut response_buffer = BytesMut::new();
//! encoder.encode(Response::ok(), &mut response_buffer).unwrap();
//! assert_eq!(&response_buffer[..], b"HTTP/1.1 200 OK\r\n\r\n");
//! ```

pub mod body;
pub mod header;
mod line;
mod request_decoder;
mod request_line;
mod response_encoder;

pub use request_decoder::RequestDecoder;
pub use request_line::RequestLineDecoder;
pub use response_encoder::ResponseEncoder;
