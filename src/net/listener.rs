//! TCP accept loop and worker dispatch.
//!
//! # Responsibilities
//! - Bind the single listening socket for the process's lifetime
//! - Accept connections indefinitely and spawn one detached worker each
//! - Resolve the peer address for logging only
//!
//! # Design Decisions
//! - The acceptor never waits on a pipeline; it returns to accept
//!   immediately after spawn
//! - With `max_connections` set, an owned semaphore permit is acquired
//!   before accept and rides along in the worker's guard

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;

use crate::config::ProxyConfig;
use crate::net::connection::ConnectionGuard;
use crate::proxy;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum AcceptorError {
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
}

/// Owns the listening socket and dispatches accepted connections.
pub struct Acceptor {
    inner: TcpListener,
    limiter: Option<Arc<Semaphore>>,
    config: Arc<ProxyConfig>,
}

impl Acceptor {
    /// Bind the listening socket on the configured host and the given port.
    pub async fn bind(port: u16, config: Arc<ProxyConfig>) -> Result<Self, AcceptorError> {
        let listener = TcpListener::bind((config.listener.bind_host.as_str(), port))
            .await
            .map_err(AcceptorError::Bind)?;

        let local_addr = listener.local_addr().map_err(AcceptorError::Bind)?;
        tracing::info!(
            address = %local_addr,
            max_connections = ?config.listener.max_connections,
            "Listener bound"
        );

        let limiter = config
            .listener
            .max_connections
            .map(|n| Arc::new(Semaphore::new(n)));

        Ok(Self {
            inner: listener,
            limiter,
            config,
        })
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.inner.local_addr()
    }

    /// Accept connections forever, spawning a detached worker for each.
    pub async fn run(self) {
        loop {
            let permit = match &self.limiter {
                Some(limiter) => Some(
                    limiter
                        .clone()
                        .acquire_owned()
                        .await
                        .expect("Semaphore closed unexpectedly"),
                ),
                None => None,
            };

            match self.inner.accept().await {
                Ok((stream, peer_addr)) => {
                    let guard = ConnectionGuard::new(permit);
                    let config = Arc::clone(&self.config);

                    tracing::debug!(conn = %guard.id(), peer_addr = %peer_addr, "Connection accepted");

                    tokio::spawn(handle_connection(stream, config, guard));
                }
                Err(error) => {
                    tracing::warn!(error = %error, "Accept failed");
                }
            }
        }
    }
}

/// Run the pipeline for one connection and close the client socket after.
async fn handle_connection(mut stream: TcpStream, config: Arc<ProxyConfig>, guard: ConnectionGuard) {
    match proxy::run(&mut stream, &config).await {
        Ok(bytes) => {
            tracing::debug!(conn = %guard.id(), bytes, "Request served");
        }
        Err(error) => {
            tracing::debug!(conn = %guard.id(), error = %error, "Connection terminated");
        }
    }
    // stream and guard drop here; the client socket closes with the worker.
}
