//! Errors reported at the boundary of the predictor.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictorError {
    /// The text is not a finite number.
    #[error("Invalid number format: '{0}'")]
    InvalidInput(String),

    #[error("Moving average window {0} is outside the range 3..=15")]
    InvalidWindow(usize),

    #[error("Threshold {0} must be a positive finite number")]
    InvalidThreshold(f64),

    #[error("Can't build the round distribution: {0}")]
    Distribution(String),

    #[error("Unknown model '{0}' (expected frequency, moving-average or markov)")]
    UnknownModel(String),
}

pub type Result<T> = std::result::Result<T, PredictorError>;
