//! Planner error type.

use thiserror::Error;

use ro_core::CoreError;

/// Errors produced by `ro-planner`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("nearest-point lookup on an empty path")]
    EmptyInput,

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type PlanResult<T> = Result<T, PlanError>;
