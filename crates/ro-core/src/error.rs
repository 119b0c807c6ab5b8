//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors produced while constructing `ro-core` values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("empty input: at least one point is required")]
    EmptyInput,

    #[error("invalid coordinate (lat {lat}, lon {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

/// Shorthand result type for `ro-core`.
pub type CoreResult<T> = Result<T, CoreError>;
