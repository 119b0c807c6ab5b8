//! Coordinate-source error type.

use thiserror::Error;

use ro_core::CoreError;

/// Errors produced by `ro-source`.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("CSV header has no {0} column")]
    MissingColumn(&'static str),

    #[error("GeoJSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SourceResult<T> = Result<T, SourceError>;
