//! Validation error types

use thiserror::Error;

/// Errors raised when planner input is malformed
///
/// Always detected before any allocation work starts, so a failing call never
/// produces a partial plan. None of these are retryable; the caller has to fix
/// the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing subject name")]
    MissingSubject,

    #[error("invalid or non-positive duration: {0}")]
    InvalidDuration(String),

    #[error("unrecognized priority: {0}")]
    UnrecognizedPriority(String),

    #[error("too many subjects: {count} (maximum {max})")]
    TooManySubjects { count: usize, max: usize },

    #[error("pomodoro duration must be 5-60 minutes in steps of 5, got {0}")]
    InvalidPomodoro(u32),

    #[error("no plan entry at index {0}")]
    NoSuchEntry(usize),
}
