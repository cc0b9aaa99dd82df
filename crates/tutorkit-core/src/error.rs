//! Core error types.
//!
//! Only synchronous, pre-call validation errors live here. Parsing and
//! transport failures on the backend path are absorbed into return values
//! (an empty exercise batch, or a zero-score grading sentinel) and never
//! surface as errors.

use thiserror::Error;

/// Errors raised by entity validation and argument checks.
#[derive(Debug, Error)]
pub enum TutorError {
    /// A grading score fell outside the 0–100 range.
    #[error("score must be between 0 and 100, got {0}")]
    ScoreOutOfRange(f64),

    /// A grading confidence fell outside the 0–1 range.
    #[error("confidence must be between 0 and 1, got {0}")]
    ConfidenceOutOfRange(f64),

    /// A caller-supplied argument was invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
