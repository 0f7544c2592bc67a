//! HTTP header processing module for encoding and decoding headers
//!
//! # Components
//!
//! - [`HeaderDecoder`]: Decodes a request header block into [`RequestHeaders`]
//!   - Line-oriented, works across partial reads
//!   - Keeps only the recognized header fields
//!   - Enforces the header block size limit
//!
//! - [`HeaderEncoder`]: Encodes a response status line and header fields
//!   - Byte-exact status lines
//!   - Content-Type, Content-Length, Content-Encoding and Connection fields
//!
//! [`RequestHeaders`]: crate::protocol::RequestHeaders

mod header_decoder;
mod header_encoder;

pub use header_decoder::HeaderDecoder;
pub use header_encoder::HeaderEncoder;
