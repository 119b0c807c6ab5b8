//! Snapshot error type.

use thiserror::Error;

/// Errors produced by `ro-snapshot`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnapshotError {
    #[error("cannot draw a route with no points")]
    EmptyRoute,

    #[error("snapshot rendering failed: {0}")]
    Render(String),

    #[error("could not start snapshot worker: {0}")]
    Spawn(String),

    #[error("snapshot renderer stopped without delivering a result")]
    Disconnected,
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;
