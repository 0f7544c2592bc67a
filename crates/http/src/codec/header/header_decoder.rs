//! HTTP header decoder implementation for parsing request header blocks
//!
//! Headers are consumed one line at a time, so a header block split across
//! several reads is decoded incrementally. Each line is split on its first
//! colon and both halves are trimmed. Lines without a colon are logged and
//! skipped. The block ends at a line that is exactly `\r\n`.
//!
//! # Limits
//!
//! - Maximum header block size: 8KB

use std::mem;

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::{trace, warn};

use crate::codec::line::{strip_line_ending, take_line};
use crate::ensure;
use crate::protocol::{ParseError, RequestHeaders};

/// Maximum size in bytes allowed for the entire header section
const MAX_HEADER_BYTES: usize = 8 * 1024;

/// Decoder for the header block of one request.
///
/// The decoder keeps the fields seen so far between calls and hands out the
/// finished [`RequestHeaders`] when the terminating blank line arrives, after
/// which it is ready for the next request.
#[derive(Debug, Default)]
pub struct HeaderDecoder {
    headers: RequestHeaders,
    consumed: usize,
}

impl Decoder for HeaderDecoder {
    type Item = RequestHeaders;
    type Error = ParseError;

    /// Attempts to decode the rest of a header block from `src`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(headers))` once the blank line terminating the block was consumed
    /// - `Ok(None)` if more data is needed
    /// - `Err(ParseError)` if the block exceeds `MAX_HEADER_BYTES`
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            let remaining = MAX_HEADER_BYTES.saturating_sub(self.consumed);
            let Some(line) = take_line(src, remaining).map_err(|_| self.too_large(src.len()))? else {
                return Ok(None);
            };

            self.consumed += line.len();
            ensure!(self.consumed <= MAX_HEADER_BYTES, self.too_large(0));

            if &line[..] == b"\r\n" {
                trace!(header_size = self.consumed, "parsed header block");
                self.consumed = 0;
                return Ok(Some(mem::take(&mut self.headers)));
            }

            self.parse_field(strip_line_ending(&line));
        }
    }
}

impl HeaderDecoder {
    fn parse_field(&mut self, line: &[u8]) {
        let Ok(line) = std::str::from_utf8(line) else {
            warn!(line = %String::from_utf8_lossy(line), "header line is not utf-8, skipped");
            return;
        };

        match line.split_once(':') {
            Some((name, value)) => {
                let (name, value) = (name.trim(), value.trim());
                if !self.headers.insert(name, value) {
                    trace!(name, "ignore unrecognized header");
                }
            }
            None => warn!(line, "header line without colon, skipped"),
        }
    }

    fn too_large(&self, pending: usize) -> ParseError {
        ParseError::too_large_header(self.consumed + pending, MAX_HEADER_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ContentCoding;
    use indoc::indoc;

    fn crlf(str: &str) -> BytesMut {
        BytesMut::from(str.replace('\n', "\r\n").as_str())
    }

    #[test]
    fn from_curl() {
        let str = indoc! {r##"
        Host: 127.0.0.1:4221
        User-Agent: curl/7.79.1
        Accept: */*

        123"##};

        let mut buf = crlf(str);

        let headers = HeaderDecoder::default().decode(&mut buf).unwrap().unwrap();

        assert_eq!(headers.host(), Some("127.0.0.1:4221"));
        assert_eq!(headers.user_agent(), Some("curl/7.79.1"));
        assert_eq!(headers.accept(), Some("*/*"));
        assert_eq!(headers.connection(), None);
        assert!(headers.accept_encoding().is_empty());

        assert_eq!(&buf[..], b"123");
    }

    #[test]
    fn from_edge() {
        let str = indoc! {r##"
        Host: 127.0.0.1:4221
        Connection: keep-alive
        Cache-Control: max-age=0
        sec-ch-ua: "#Not_A Brand";v="99", "Microsoft Edge";v="109", "Chromium";v="109"
        User-Agent: Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36 Edg/109.0.1518.52
        Accept: text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8
        Accept-Encoding: gzip, deflate, br
        Accept-Language: zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7

        "##};

        let mut buf = crlf(str);

        let headers = HeaderDecoder::default().decode(&mut buf).unwrap().unwrap();

        assert_eq!(headers.connection(), Some("keep-alive"));
        assert!(!headers.is_close());
        assert_eq!(
            headers.user_agent(),
            Some("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36 Edg/109.0.1518.52")
        );
        assert_eq!(headers.accept(), Some("text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8"));
        assert_eq!(headers.accept_encoding(), &[ContentCoding::Gzip]);
        assert!(buf.is_empty());
    }

    #[test]
    fn value_keeps_inner_colons_and_is_trimmed() {
        let mut buf = crlf("Host:    localhost:4221   \nContent-Type:text/plain\n\n");

        let headers = HeaderDecoder::default().decode(&mut buf).unwrap().unwrap();

        assert_eq!(headers.host(), Some("localhost:4221"));
        assert_eq!(headers.content_type(), Some("text/plain"));
    }

    #[test]
    fn line_without_colon_is_skipped() {
        let mut buf = crlf("Host: localhost\nthis line has no colon\nUser-Agent: foobar/1.2.3\n\n");

        let headers = HeaderDecoder::default().decode(&mut buf).unwrap().unwrap();

        assert_eq!(headers.host(), Some("localhost"));
        assert_eq!(headers.user_agent(), Some("foobar/1.2.3"));
    }

    #[test]
    fn accept_encoding_drops_unsupported_tokens() {
        let mut buf = crlf("Accept-Encoding: invalid-encoding-1, gzip, invalid-encoding-2\n\n");

        let headers = HeaderDecoder::default().decode(&mut buf).unwrap().unwrap();

        assert_eq!(headers.accept_encoding(), &[ContentCoding::Gzip]);

        let mut buf = crlf("Accept-Encoding: invalid-encoding-1, invalid-encoding-2\n\n");

        let headers = HeaderDecoder::default().decode(&mut buf).unwrap().unwrap();

        assert!(headers.accept_encoding().is_empty());
    }

    #[test]
    fn split_across_reads() {
        let mut decoder = HeaderDecoder::default();
        let mut buf = BytesMut::from("Host: local");

        assert!(decoder.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(b"host\r\nUser-Agent: grape/");
        assert!(decoder.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(b"banana\r\n\r");
        assert!(decoder.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(b"\n");
        let headers = decoder.decode(&mut buf).unwrap().unwrap();

        assert_eq!(headers.host(), Some("localhost"));
        assert_eq!(headers.user_agent(), Some("grape/banana"));
    }

    #[test]
    fn decoder_is_reset_after_a_block() {
        let mut decoder = HeaderDecoder::default();
        let mut buf = crlf("User-Agent: first\n\nHost: second\n\n");

        let first = decoder.decode(&mut buf).unwrap().unwrap();
        assert_eq!(first.user_agent(), Some("first"));

        let second = decoder.decode(&mut buf).unwrap().unwrap();
        assert_eq!(second.user_agent(), None);
        assert_eq!(second.host(), Some("second"));
    }

    #[test]
    fn too_large_header_block() {
        let mut decoder = HeaderDecoder::default();
        let line = format!("X-Padding: {}\r\n", "a".repeat(1000));
        let mut buf = BytesMut::new();
        for _ in 0..9 {
            buf.extend_from_slice(line.as_bytes());
        }

        let result = decoder.decode(&mut buf);
        assert!(matches!(result, Err(ParseError::TooLargeHeader { max_size: MAX_HEADER_BYTES, .. })));
    }
}
