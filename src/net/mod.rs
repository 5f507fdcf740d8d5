//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (accept loop, optional connection cap)
//!     → connection.rs (identity, lifetime logging)
//!     → detached worker runs the proxy pipeline
//!     → worker drops the client socket on exit
//! ```
//!
//! # Design Decisions
//! - Workers are spawn-and-forget; nothing joins them and nothing cancels
//!   them, they run to success or first I/O failure
//! - Accept errors never stop the loop
//! - The optional connection cap is off by default

pub mod connection;
pub mod listener;

pub use connection::{ConnectionGuard, ConnectionId};
pub use listener::{Acceptor, AcceptorError};
