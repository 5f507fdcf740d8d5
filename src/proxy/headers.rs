//! Client header relay with canonical-header substitution.
//!
//! # Responsibilities
//! - Stream client header lines to the upstream connection byte-for-byte
//! - Suppress the four headers the pipeline synthesizes itself
//! - Consume, but never forward, the blank terminator line

use std::io;

use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use crate::http::read_line_bounded;

/// Header-name prefixes that are never forwarded from the client; the
/// pipeline writes its own versions. Matching is a case-sensitive prefix
/// comparison against the raw line.
pub const SUPPRESSED_HEADERS: [&str; 4] =
    ["Host:", "Connection:", "User-Agent:", "Proxy-Connection:"];

/// Relay client header lines to `upstream` until the blank terminator or
/// end of input.
///
/// The terminator is consumed but not forwarded; the caller writes its own
/// after its synthesized headers. The first failed upstream write aborts
/// the scan.
pub async fn relay_client_headers<R, W>(
    client: &mut R,
    upstream: &mut W,
    max_line: usize,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let line = match read_line_bounded(client, max_line).await? {
            Some(line) => line,
            None => return Ok(()),
        };

        if line == b"\r\n" {
            return Ok(());
        }

        if is_suppressed(&line) {
            tracing::trace!(line = %String::from_utf8_lossy(&line).trim_end(), "Suppressed client header");
            continue;
        }

        upstream.write_all(&line).await?;
    }
}

fn is_suppressed(line: &[u8]) -> bool {
    SUPPRESSED_HEADERS
        .iter()
        .any(|name| line.starts_with(name.as_bytes()))
}
