//! Decoder implementation for request bodies framed by a Content-Length header.
//!
//! The whole body is handed out at once: the decoder waits until `length`
//! bytes are buffered, then splits them off as a single [`Bytes`] value.

use std::cmp;

use bytes::{Bytes, BytesMut};
use tokio_util::codec::Decoder;

use crate::protocol::ParseError;

/// Upper bound for a single buffer reservation while waiting for body bytes
const MAX_RESERVE: usize = 64 * 1024;

/// A decoder for a body with a known content length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthDecoder {
    /// The total number of body bytes to read
    length: u64,
}

impl LengthDecoder {
    /// Creates a new `LengthDecoder` for a body of `length` bytes.
    pub fn new(length: u64) -> Self {
        Self { length }
    }
}

impl Decoder for LengthDecoder {
    type Item = Bytes;
    type Error = ParseError;

    /// # Returns
    /// * `Ok(Some(bytes))` with exactly `length` bytes once they are all buffered
    /// * `Ok(None)` when more data is needed
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let length = usize::try_from(self.length)
            .map_err(|e| ParseError::invalid_content_length(format!("{} does not fit in memory: {e}", self.length)))?;

        if src.len() < length {
            src.reserve(cmp::min(length - src.len(), MAX_RESERVE));
            return Ok(None);
        }

        Ok(Some(src.split_to(length).freeze()))
    }
}
