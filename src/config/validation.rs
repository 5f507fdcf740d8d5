//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (limits nonzero, bind host parseable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::IpAddr;

use thiserror::Error;

use crate::config::schema::ProxyConfig;

/// A single semantic validation failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_host {0:?} is not an IP address")]
    BindHost(String),

    #[error("listener.max_connections must be greater than zero when set")]
    MaxConnections,

    #[error("limits.{0} must be greater than zero")]
    ZeroLimit(&'static str),
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_host.parse::<IpAddr>().is_err() {
        errors.push(ValidationError::BindHost(config.listener.bind_host.clone()));
    }

    if config.listener.max_connections == Some(0) {
        errors.push(ValidationError::MaxConnections);
    }

    let limits = [
        ("max_line_bytes", config.limits.max_line_bytes),
        ("max_error_body_bytes", config.limits.max_error_body_bytes),
        ("relay_chunk_bytes", config.limits.relay_chunk_bytes),
        ("max_path_bytes", config.limits.max_path_bytes),
    ];
    for (name, value) in limits {
        if value == 0 {
            errors.push(ValidationError::ZeroLimit(name));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ProxyConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_failure() {
        let mut config = ProxyConfig::default();
        config.listener.bind_host = "not-an-ip".to_string();
        config.listener.max_connections = Some(0);
        config.limits.relay_chunk_bytes = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::MaxConnections));
        assert!(errors.contains(&ValidationError::ZeroLimit("relay_chunk_bytes")));
    }
}
