//! Bounded line-oriented reads from a buffered stream.
//!
//! # Responsibilities
//! - Read exactly one line, terminator included, from an async buffered reader
//! - Enforce a hard cap on line length before any byte is copied
//! - Distinguish clean end-of-stream from I/O failure
//!
//! # Design Decisions
//! - Lines are returned as raw bytes; headers must be relayed byte-for-byte,
//!   so no UTF-8 requirement is imposed here
//! - An over-long line is an error for the affected connection, never a
//!   truncated read

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Read one line, including its `\n` terminator, from `reader`.
///
/// Returns `Ok(None)` when the stream ends before any byte of a new line is
/// seen. A final line without a terminator is returned as-is. A line longer
/// than `max` bytes yields an `InvalidData` error.
pub async fn read_line_bounded<R>(reader: &mut R, max: usize) -> io::Result<Option<Vec<u8>>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();

    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return if line.is_empty() { Ok(None) } else { Ok(Some(line)) };
        }

        let (chunk, done) = match available.iter().position(|&b| b == b'\n') {
            Some(newline) => (&available[..=newline], true),
            None => (available, false),
        };

        if line.len() + chunk.len() > max {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line exceeds {max} bytes"),
            ));
        }

        line.extend_from_slice(chunk);
        let consumed = chunk.len();
        reader.consume(consumed);

        if done {
            return Ok(Some(line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    #[tokio::test]
    async fn reads_line_with_terminator() {
        let mut reader = BufReader::new(&b"GET / HTTP/1.0\r\nHost: a\r\n"[..]);
        let line = read_line_bounded(&mut reader, 8192).await.unwrap().unwrap();
        assert_eq!(line, b"GET / HTTP/1.0\r\n");

        let line = read_line_bounded(&mut reader, 8192).await.unwrap().unwrap();
        assert_eq!(line, b"Host: a\r\n");
    }

    #[tokio::test]
    async fn returns_none_at_end_of_stream() {
        let mut reader = BufReader::new(&b""[..]);
        assert!(read_line_bounded(&mut reader, 8192).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn returns_final_unterminated_line() {
        let mut reader = BufReader::new(&b"partial"[..]);
        let line = read_line_bounded(&mut reader, 8192).await.unwrap().unwrap();
        assert_eq!(line, b"partial");
        assert!(read_line_bounded(&mut reader, 8192).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rejects_over_long_line() {
        let input = vec![b'a'; 100];
        let mut reader = BufReader::new(&input[..]);
        let err = read_line_bounded(&mut reader, 64).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
