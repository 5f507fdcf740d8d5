//! Request forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! accepted client connection
//!     → pipeline.rs (parse → validate → connect → rewrite)
//!     → headers.rs (relay client headers, substitute canonical ones)
//!     → relay.rs (stream the origin response back verbatim)
//!     → both sockets dropped, worker exits
//! ```
//!
//! # Design Decisions
//! - One linear pipeline per connection; every stage's failure edge is an
//!   early return and a silent teardown
//! - The unsupported-method page is the only client-visible error output
//! - The forwarded request is always downgraded to HTTP/1.0 and carries
//!   `Connection: close`, so the origin ends the exchange by closing

pub mod headers;
pub mod pipeline;
pub mod relay;

pub use pipeline::{run, PipelineError};

/// User-Agent header value substituted into every forwarded request.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:3.10.0) Gecko/20240719 Firefox/63.0.1";
