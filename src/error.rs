//! Error types for the visualizer core.

use thiserror::Error;

/// Precondition violations surfaced to the caller.
///
/// Degenerate numeric input (negative or NaN frame deltas, NaN spectrum
/// values) is recovered locally and never produces an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The audio collaborator delivered fewer bands than the smoother owns
    #[error("spectrum has {actual} bands, expected at least {expected}")]
    SpectrumTooShort { expected: usize, actual: usize },

    /// Remap input range collapses to a point (division by zero)
    #[error("degenerate remap input range [{in_min}, {in_max}]")]
    DegenerateRange { in_min: f32, in_max: f32 },

    /// Link distance must be a finite, non-negative number
    #[error("invalid link distance threshold: {0}")]
    InvalidThreshold(f32),

    /// A tuning constant is out of its documented range
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Audio file could not be opened or decoded
    #[error("audio decode failed: {0}")]
    Audio(String),
}

pub type Result<T> = std::result::Result<T, Error>;
