//! Core error types

use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when a caller hands the core ill-formed input.
///
/// Evaluation and explanation never fail on well-formed values; these
/// variants come from the checked constructors and the classifier boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("unknown label: {0}")]
    UnknownLabel(String),

    #[error("score mapping is empty")]
    EmptyScores,

    #[error("invalid probability for {label}: {value} (expected a finite value in [0, 1])")]
    InvalidProbability { label: String, value: f64 },

    #[error("{name} must be a finite value in [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("inference failed: {0}")]
    Inference(String),
}
