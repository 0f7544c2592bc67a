//! Response body compression.
//!
//! The negotiation looks at the codings the client accepts, in the order it
//! listed them, and compresses the body with the first one the server
//! supports. See [`encode_body`].

mod encoder;

pub use encoder::{Encoded, encode_body};

use bytes::{Bytes, BytesMut};
use std::io;

/// In-memory sink the compressors write into
#[derive(Debug)]
pub(crate) struct Writer {
    buf: BytesMut,
}

impl Writer {
    fn new() -> Self {
        Self { buf: BytesMut::with_capacity(4096) }
    }

    fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }
}

impl io::Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
