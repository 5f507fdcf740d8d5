//! Per-connection request pipeline.
//!
//! # Responsibilities
//! - Read and parse the request line, accept only GET
//! - Decompose the absolute-form target and connect to the origin
//! - Write the rewritten request line, synthesized headers, and the
//!   client's remaining headers to the origin
//! - Relay the origin's response back to the client
//!
//! # Design Decisions
//! - A linear async function stands in for the per-connection state
//!   machine; each stage's failure edge is a `?` early return
//! - Failures tear the connection down silently; the 501 page for a
//!   non-GET method is the only error the client ever sees
//! - Dropping the streams on every exit path closes both sockets

use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use thiserror::Error;

use crate::config::ProxyConfig;
use crate::http::error_page::build_error_response;
use crate::http::{read_line_bounded, RequestLine, RequestLineError, Target, TargetError};
use crate::proxy::headers::relay_client_headers;
use crate::proxy::relay::relay_response;
use crate::proxy::USER_AGENT;

/// Error type for a terminated connection.
///
/// Carried back to the worker for a debug log line; nothing here reaches
/// the client.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("client closed without sending a request")]
    NoRequest,

    #[error(transparent)]
    BadRequestLine(#[from] RequestLineError),

    #[error(transparent)]
    BadTarget(#[from] TargetError),

    #[error("unsupported method {0:?}")]
    UnsupportedMethod(String),

    #[error("connect to {host}:{port} failed: {source}")]
    Connect {
        host: String,
        port: String,
        source: std::io::Error,
    },

    #[error("client I/O: {0}")]
    Client(std::io::Error),

    #[error("upstream I/O: {0}")]
    Upstream(std::io::Error),

    #[error("header relay failed: {0}")]
    HeaderRelay(std::io::Error),

    #[error("response relay stopped: {0}")]
    ResponseRelay(std::io::Error),
}

/// Serve one client connection end-to-end.
///
/// Returns the number of response bytes relayed to the client. Both the
/// upstream stream (owned here) and the client stream (owned by the
/// caller) are closed by drop on every exit path.
pub async fn run(client: &mut TcpStream, config: &ProxyConfig) -> Result<u64, PipelineError> {
    let limits = &config.limits;
    let (client_read, mut client_write) = client.split();
    let mut client_reader = BufReader::new(client_read);

    let line = read_line_bounded(&mut client_reader, limits.max_line_bytes)
        .await
        .map_err(PipelineError::Client)?
        .ok_or(PipelineError::NoRequest)?;

    let request = RequestLine::parse(&line)?;
    tracing::debug!(
        method = %request.method,
        target = %request.target,
        version = %request.version,
        "Request received"
    );

    // Only GET goes upstream; everything else gets the 501 page.
    if request.method != "GET" {
        if let Some(response) = build_error_response(
            "501",
            "Not Implemented",
            "Tiny does not implement this method",
            limits.max_error_body_bytes,
        ) {
            client_write
                .write_all(&response)
                .await
                .map_err(PipelineError::Client)?;
        }
        return Err(PipelineError::UnsupportedMethod(request.method));
    }

    let target = Target::decompose(&request.target, limits.max_path_bytes)?;
    let mut upstream = TcpStream::connect(format!("{}:{}", target.host, target.port))
        .await
        .map_err(|source| PipelineError::Connect {
            host: target.host.clone(),
            port: target.port.clone(),
            source,
        })?;

    // The forwarded version is always HTTP/1.0. An empty path is forwarded
    // as-is, leaving two consecutive spaces on the wire.
    let request_line = format!("{} {} HTTP/1.0\r\n", request.method, target.path);
    upstream
        .write_all(request_line.as_bytes())
        .await
        .map_err(PipelineError::Upstream)?;

    // Always the proxy's versions of these four, never the client's.
    let synthetic = format!(
        "Host: {}:{}\r\nUser-Agent: {USER_AGENT}\r\nConnection: close\r\nProxy-Connection: close\r\n",
        target.host, target.port
    );
    upstream
        .write_all(synthetic.as_bytes())
        .await
        .map_err(PipelineError::Upstream)?;

    relay_client_headers(&mut client_reader, &mut upstream, limits.max_line_bytes)
        .await
        .map_err(PipelineError::HeaderRelay)?;

    // End of the forwarded request head.
    upstream
        .write_all(b"\r\n")
        .await
        .map_err(PipelineError::Upstream)?;

    let relayed = relay_response(&mut upstream, &mut client_write, limits.relay_chunk_bytes)
        .await
        .map_err(PipelineError::ResponseRelay)?;

    tracing::debug!(
        host = %target.host,
        port = %target.port,
        path = %target.path,
        bytes = relayed,
        "Response relayed"
    );

    Ok(relayed)
}
