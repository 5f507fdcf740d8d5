//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging only; the proxy exposes no metrics endpoint
//! - Per-connection events carry a `conn` field so one worker's lifecycle
//!   can be followed through the log

pub mod logging;
