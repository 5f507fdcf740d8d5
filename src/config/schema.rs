//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the forwarding proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind host, connection limits).
    pub listener: ListenerConfig,

    /// Buffer and line-length limits.
    pub limits: LimitsConfig,
}

/// Listener configuration.
///
/// The listening port is not part of the config file; it is the one
/// mandatory command-line argument.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Host to bind the listening socket to (e.g., "0.0.0.0").
    pub bind_host: String,

    /// Maximum concurrent connections. `None` dispatches every accepted
    /// connection immediately with no cap.
    pub max_connections: Option<usize>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            max_connections: None,
        }
    }
}

/// Bounded-capacity buffer limits.
///
/// Every read into a growable buffer is checked against one of these caps
/// before any copy happens; overflow is a handled error path for the
/// affected connection, never a truncated write.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum bytes in a single request or header line, terminator included.
    pub max_line_bytes: usize,

    /// Maximum bytes in a generated error response body.
    pub max_error_body_bytes: usize,

    /// Chunk size for relaying the origin's response to the client.
    pub relay_chunk_bytes: usize,

    /// Maximum bytes kept from the path component of a request target.
    pub max_path_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_bytes: 8192,
            max_error_body_bytes: 8192,
            relay_chunk_bytes: 8192,
            max_path_bytes: 8192,
        }
    }
}
