//! Absolute-form URI decomposition.
//!
//! # Responsibilities
//! - Split `http://host[:port][/path]` into host, port, and path
//! - Default the port to `"80"` when the target names none
//!
//! # Design Decisions
//! - Cursor scanning over the input with an explicit delimiter set per
//!   phase; the host scan stops at `:`, `/`, or space, the port scan at
//!   `/` or space
//! - The port stays a string; it is only ever used to build the upstream
//!   address and the synthesized Host header
//! - A target with no path component yields the empty string, not `/`

use thiserror::Error;

const SCHEME_PREFIX: &str = "http://";

/// Delimiters that end the host span.
const HOST_DELIMITERS: &[u8] = &[b':', b'/', b' '];
/// Delimiters that end the port span.
const PORT_DELIMITERS: &[u8] = &[b'/', b' '];

/// Error type for target decomposition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("request target {0:?} does not start with http://")]
    Scheme(String),

    #[error("request target has an empty host")]
    EmptyHost,
}

/// The decomposed parts of an absolute-form request target.
///
/// Derived once from the request line and consumed immediately to open the
/// upstream connection and build the rewritten request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Origin host name or address.
    pub host: String,
    /// Origin port, `"80"` unless the target names one.
    pub port: String,
    /// Path starting at `/`, or empty when the target has none.
    pub path: String,
}

impl Target {
    /// Decompose an absolute-form request target.
    ///
    /// The path is capped at `max_path` bytes; anything beyond the cap is
    /// discarded.
    pub fn decompose(target: &str, max_path: usize) -> Result<Self, TargetError> {
        let rest = target
            .strip_prefix(SCHEME_PREFIX)
            .ok_or_else(|| TargetError::Scheme(target.to_string()))?;
        let bytes = rest.as_bytes();

        let host_end = scan(bytes, 0, HOST_DELIMITERS);
        let host = &rest[..host_end];
        if host.is_empty() {
            return Err(TargetError::EmptyHost);
        }

        let mut port = None;
        let mut path_start = None;
        match bytes.get(host_end) {
            Some(b':') => {
                let port_end = scan(bytes, host_end + 1, PORT_DELIMITERS);
                port = Some(&rest[host_end + 1..port_end]);
                if bytes.get(port_end) == Some(&b'/') {
                    path_start = Some(port_end);
                }
            }
            Some(b'/') => path_start = Some(host_end),
            _ => {}
        }

        let path = match path_start {
            Some(start) => truncate_to_boundary(&rest[start..], max_path),
            None => "",
        };

        Ok(Self {
            host: host.to_string(),
            port: port.unwrap_or("80").to_string(),
            path: path.to_string(),
        })
    }
}

/// Advance from `start` until one of `delimiters` or end of input.
fn scan(bytes: &[u8], start: usize, delimiters: &[u8]) -> usize {
    let mut cursor = start;
    while cursor < bytes.len() && !delimiters.contains(&bytes[cursor]) {
        cursor += 1;
    }
    cursor
}

/// Truncate to at most `max` bytes without splitting a UTF-8 sequence.
fn truncate_to_boundary(input: &str, max: usize) -> &str {
    if input.len() <= max {
        return input;
    }
    let mut end = max;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    &input[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_PATH: usize = 8192;

    #[test]
    fn splits_host_port_and_path() {
        let target = Target::decompose("http://a.com:8080/path", MAX_PATH).unwrap();
        assert_eq!(target.host, "a.com");
        assert_eq!(target.port, "8080");
        assert_eq!(target.path, "/path");
    }

    #[test]
    fn defaults_port_to_80() {
        let target = Target::decompose("http://example.com/index.html", MAX_PATH).unwrap();
        assert_eq!(target.host, "example.com");
        assert_eq!(target.port, "80");
        assert_eq!(target.path, "/index.html");
    }

    #[test]
    fn keeps_path_empty_when_target_has_none() {
        let target = Target::decompose("http://a.com", MAX_PATH).unwrap();
        assert_eq!(target.path, "");

        let target = Target::decompose("http://a.com:8080", MAX_PATH).unwrap();
        assert_eq!(target.port, "8080");
        assert_eq!(target.path, "");
    }

    #[test]
    fn path_includes_leading_slash_and_query() {
        let target = Target::decompose("http://h/p?q=1&r=2", MAX_PATH).unwrap();
        assert_eq!(target.path, "/p?q=1&r=2");
    }

    #[test]
    fn caps_path_length() {
        let long = format!("http://h/{}", "a".repeat(100));
        let target = Target::decompose(&long, 16).unwrap();
        assert_eq!(target.path.len(), 16);
        assert!(target.path.starts_with("/aaa"));
    }

    #[test]
    fn rejects_missing_scheme() {
        assert!(matches!(
            Target::decompose("/relative/path", MAX_PATH),
            Err(TargetError::Scheme(_))
        ));
        assert!(matches!(
            Target::decompose("https://a.com/", MAX_PATH),
            Err(TargetError::Scheme(_))
        ));
    }

    #[test]
    fn rejects_empty_host() {
        assert_eq!(
            Target::decompose("http:///path", MAX_PATH),
            Err(TargetError::EmptyHost)
        );
    }
}
