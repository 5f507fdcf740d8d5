//! Connection identity and lifetime tracking.
//!
//! # Responsibilities
//! - Generate unique connection IDs for tracing
//! - Tie any acquired accept permit to the connection's lifetime
//! - Log teardown when a worker finishes

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::OwnedSemaphorePermit;

/// Global atomic counter for connection IDs.
/// Relaxed ordering is sufficient since we only need uniqueness, not
/// synchronization.
static CONNECTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Generate a new unique connection ID.
    pub fn new() -> Self {
        Self(CONNECTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Guard that tracks a connection's lifetime inside its worker.
///
/// Holds the accept permit, when the listener runs with a connection cap,
/// so the slot frees exactly when the worker exits.
#[derive(Debug)]
pub struct ConnectionGuard {
    id: ConnectionId,
    _permit: Option<OwnedSemaphorePermit>,
}

impl ConnectionGuard {
    /// Create a guard for a freshly accepted connection.
    pub fn new(permit: Option<OwnedSemaphorePermit>) -> Self {
        Self {
            id: ConnectionId::new(),
            _permit: permit,
        }
    }

    /// Get this connection's ID.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        tracing::trace!(conn = %self.id, "Connection closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_id_unique() {
        let id1 = ConnectionId::new();
        let id2 = ConnectionId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn guard_reports_its_id() {
        let guard = ConnectionGuard::new(None);
        assert_eq!(guard.id().as_u64(), guard.id().as_u64());
    }
}
