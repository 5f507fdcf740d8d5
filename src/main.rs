//! Forwarding HTTP Proxy
//!
//! A forwarding HTTP intermediary built with Tokio: it accepts client
//! connections, reads one absolute-URI GET request per connection, rewrites
//! it, forwards it to the origin server, and relays the response back
//! unmodified.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                FORWARD PROXY                   │
//!                      │                                                │
//!     Client Request   │  ┌─────────┐   ┌──────────┐   ┌────────────┐  │
//!     ─────────────────┼─▶│   net   │──▶│  proxy   │──▶│    http    │  │
//!                      │  │acceptor │   │ pipeline │   │ uri/parser │  │
//!                      │  └─────────┘   └────┬─────┘   └────────────┘  │
//!                      │                     │                          │
//!                      │                     ▼                          │
//!                      │              ┌────────────┐                   │
//!                      │              │  upstream  │                   │
//!     Client Response  │  ┌─────────┐ │ connection │                   │
//!     ◀────────────────┼──│ response│◀┤ (origin)   │◀──────────────────┼──── Origin
//!                      │  │  relay  │ └────────────┘                   │     Server
//!                      │  └─────────┘                                  │
//!                      │                                                │
//!                      │  ┌──────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns           │ │
//!                      │  │   ┌─────────┐        ┌───────────────┐   │ │
//!                      │  │   │ config  │        │ observability │   │ │
//!                      │  │   └─────────┘        └───────────────┘   │ │
//!                      │  └──────────────────────────────────────────┘ │
//!                      └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::Parser;

use forward_proxy::config::{self, ProxyConfig};
use forward_proxy::net::Acceptor;
use forward_proxy::observability;

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(name = "forward-proxy", about = "A forwarding HTTP proxy")]
struct Cli {
    /// Port to listen on.
    port: u16,

    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Argument errors must exit with status 1 before any socket is bound;
    // clap's default exit code for usage errors is 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return;
        }
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    observability::logging::init();

    tracing::info!("forward-proxy v0.1.0 starting");

    let config = match &cli.config {
        Some(path) => match config::load_config(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "Failed to load configuration");
                process::exit(1);
            }
        },
        None => ProxyConfig::default(),
    };

    tracing::info!(
        bind_host = %config.listener.bind_host,
        port = cli.port,
        max_connections = ?config.listener.max_connections,
        "Configuration loaded"
    );

    let acceptor = match Acceptor::bind(cli.port, Arc::new(config)).await {
        Ok(acceptor) => acceptor,
        Err(err) => {
            tracing::error!(port = cli.port, error = %err, "Failed to bind listener");
            process::exit(1);
        }
    };

    acceptor.run().await;
}
