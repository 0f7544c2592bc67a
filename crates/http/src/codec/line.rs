//! Line framing shared by the request line and header decoders.

use bytes::BytesMut;

use crate::ensure;
use crate::protocol::ParseError;

/// Splits the next `\n`-terminated line off `src`, terminator included.
///
/// Returns `Ok(None)` when no complete line is buffered yet. A partial line
/// longer than `limit` bytes is rejected so a peer can't grow the buffer
/// without bound.
pub(crate) fn take_line(src: &mut BytesMut, limit: usize) -> Result<Option<BytesMut>, ParseError> {
    match src.iter().position(|b| *b == b'\n') {
        Some(index) => {
            ensure!(index < limit, ParseError::too_large_header(index + 1, limit));
            Ok(Some(src.split_to(index + 1)))
        }
        None => {
            ensure!(src.len() <= limit, ParseError::too_large_header(src.len(), limit));
            Ok(None)
        }
    }
}

/// Removes a trailing `\r\n` or `\n`.
pub(crate) fn strip_line_ending(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r\n").or_else(|| line.strip_suffix(b"\n")).unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_line_waits() {
        let mut buf = BytesMut::from(&b"GET / HT"[..]);
        assert!(take_line(&mut buf, 64).unwrap().is_none());
        assert_eq!(&buf[..], b"GET / HT");
    }

    #[test]
    fn splits_one_line_at_a_time() {
        let mut buf = BytesMut::from(&b"first\r\nsecond\r\nrest"[..]);

        let first = take_line(&mut buf, 64).unwrap().unwrap();
        assert_eq!(&first[..], b"first\r\n");

        let second = take_line(&mut buf, 64).unwrap().unwrap();
        assert_eq!(&second[..], b"second\r\n");

        assert!(take_line(&mut buf, 64).unwrap().is_none());
        assert_eq!(&buf[..], b"rest");
    }

    #[test]
    fn overlong_line_is_rejected() {
        let mut buf = BytesMut::from(&[b'a'; 32][..]);
        assert!(matches!(take_line(&mut buf, 16), Err(ParseError::TooLargeHeader { .. })));

        let mut buf = BytesMut::from(&b"aaaaaaaaaaaaaaaaaaaa\r\n"[..]);
        assert!(matches!(take_line(&mut buf, 16), Err(ParseError::TooLargeHeader { .. })));
    }

    #[test]
    fn strip_endings() {
        assert_eq!(strip_line_ending(b"abc\r\n"), b"abc");
        assert_eq!(strip_line_ending(b"abc\n"), b"abc");
        assert_eq!(strip_line_ending(b"abc"), b"abc");
        assert_eq!(strip_line_ending(b"\r\n"), b"");
    }
}
