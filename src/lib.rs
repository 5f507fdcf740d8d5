//! Forwarding HTTP Proxy Library

pub mod config;
pub mod http;
pub mod net;
pub mod observability;
pub mod proxy;

pub use config::ProxyConfig;
pub use net::Acceptor;
