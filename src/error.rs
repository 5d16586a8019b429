//! Error types for program construction and playback.

use thiserror::Error;

/// Result type for program and playback operations.
pub type Result<T> = std::result::Result<T, ProgramError>;

/// Errors raised while querying a [`CommandLog`](crate::CommandLog) or stepping through it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    /// A playback index fell outside `0..=len`.
    #[error("step {index} is out of range: program has {steps} steps (valid range 0..{steps})")]
    StepOutOfRange { index: usize, steps: usize },

    /// A playback cursor was asked to cycle over no steps at all.
    #[error("cannot step through an empty timeline")]
    EmptyTimeline,
}
