//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", "))]
    Validation(Vec<ValidationError>),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ProxyConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_config_with_defaults() {
        let config: ProxyConfig = toml::from_str(
            r#"
            [listener]
            bind_host = "127.0.0.1"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_host, "127.0.0.1");
        assert_eq!(config.listener.max_connections, None);
        assert_eq!(config.limits.max_line_bytes, 8192);
    }

    #[test]
    fn rejects_malformed_toml() {
        let result: Result<ProxyConfig, _> = toml::from_str("listener = 42");
        assert!(result.is_err());
    }
}
