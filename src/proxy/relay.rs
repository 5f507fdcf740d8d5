//! Origin response relay.
//!
//! # Responsibilities
//! - Stream origin bytes back to the client one bounded chunk at a time
//! - Stop at origin end-of-stream or the first failed read or write
//!
//! # Design Decisions
//! - No reframing and no inspection: status line, headers, and body reach
//!   the client exactly as the origin sent them, whatever framing the
//!   origin chose

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Copy the origin's response to the client until end-of-stream.
///
/// Returns the number of bytes relayed. A failed read from the origin or a
/// failed write to the client ends the relay with the error; whatever was
/// already written stays written.
pub async fn relay_response<R, W>(
    upstream: &mut R,
    client: &mut W,
    chunk_size: usize,
) -> io::Result<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut chunk = vec![0u8; chunk_size];
    let mut total = 0u64;

    loop {
        let read = upstream.read(&mut chunk).await?;
        if read == 0 {
            return Ok(total);
        }
        client.write_all(&chunk[..read]).await?;
        total += read as u64;
    }
}
