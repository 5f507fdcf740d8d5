//! Request-line tokenization.
//!
//! # Responsibilities
//! - Split one HTTP request line into method, request-target, and version
//! - Report a parse failure for anything that is not a request line
//!
//! # Design Decisions
//! - No method or version policy here; accepting only GET is the pipeline's
//!   decision, not the parser's
//! - Tokens beyond the third are ignored, matching scanf-style tokenizers

use thiserror::Error;

/// Error type for request-line parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestLineError {
    #[error("request line is not valid UTF-8")]
    Encoding,

    #[error("malformed request line {0:?}")]
    Malformed(String),
}

/// The first line of an HTTP request, parsed once per connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// Request method, e.g. `GET`.
    pub method: String,
    /// Raw request target, expected in absolute form.
    pub target: String,
    /// Protocol version as the client stated it, e.g. `HTTP/1.1`.
    pub version: String,
}

impl RequestLine {
    /// Parse a raw request line (terminator included) into its three tokens.
    pub fn parse(raw: &[u8]) -> Result<Self, RequestLineError> {
        let line = std::str::from_utf8(raw).map_err(|_| RequestLineError::Encoding)?;
        let line = line.trim_end_matches(['\r', '\n']);

        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(method), Some(target), Some(version)) => Ok(Self {
                method: method.to_string(),
                target: target.to_string(),
                version: version.to_string(),
            }),
            _ => Err(RequestLineError::Malformed(line.to_string())),
        }
    }
}
