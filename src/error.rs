//! Error types for u-labcalc.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabError {
    /// The Student's t table has no entry for this sample count and
    /// confidence level. No interpolation is attempted.
    #[error("no t-value tabulated for n = {sample_count} at confidence {confidence}")]
    UnsupportedParameter { sample_count: usize, confidence: f64 },

    /// Exactly one Type-B input was expected.
    #[error("conflicting arguments: {0}")]
    ConflictingArguments(String),

    #[error("need at least {required} sample(s), got {actual}")]
    InsufficientSamples { required: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, LabError>;
