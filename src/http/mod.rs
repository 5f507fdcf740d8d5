//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! client connection
//!     → line_reader.rs (bounded line reads)
//!     → request.rs (tokenize the request line)
//!     → uri.rs (decompose the absolute-form target)
//!     → [proxy pipeline rewrites and forwards]
//!     → error_page.rs (only for the unsupported-method response)
//! ```

pub mod error_page;
pub mod line_reader;
pub mod request;
pub mod uri;

pub use line_reader::read_line_bounded;
pub use request::{RequestLine, RequestLineError};
pub use uri::{Target, TargetError};
