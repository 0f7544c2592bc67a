//! HTTP body framing.
//!
//! Only Content-Length framing is supported: [`LengthDecoder`] reads exactly
//! the announced number of bytes. A request without Content-Length has an
//! empty body.

mod length_decoder;

pub use length_decoder::LengthDecoder;
