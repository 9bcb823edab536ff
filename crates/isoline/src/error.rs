//! Error types for isoline extraction.
//!
//! Contouring itself never fails: degenerate grids produce no segments and
//! degenerate edges produce non-finite coordinates. Errors only arise while
//! building a [`ScalarField`](crate::field::ScalarField) or loading
//! [`ContourOptions`](crate::options::ContourOptions).

use thiserror::Error;

/// Result type alias using IsolineError.
pub type IsolineResult<T> = Result<T, IsolineError>;

/// Errors raised while preparing inputs for contouring.
#[derive(Debug, Error)]
pub enum IsolineError {
    /// Flat sample buffer does not match the declared dimensions.
    #[error("sample count {actual} does not match grid dimensions (expected {expected})")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A row of a nested sample array has a different length than the first row.
    #[error("row {row} has {actual} samples, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// An option value is unusable.
    #[error("invalid option '{param}': {message}")]
    InvalidOption { param: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl IsolineError {
    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create an InvalidOption error.
    pub fn invalid_option(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            param: param.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for IsolineError {
    fn from(err: std::io::Error) -> Self {
        IsolineError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for IsolineError {
    fn from(err: serde_json::Error) -> Self {
        IsolineError::Json(err.to_string())
    }
}
