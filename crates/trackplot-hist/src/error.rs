//! Error types for the histogram layer.

use thiserror::Error;

/// Errors from booking, projection and manifest reading.
#[derive(Error, Debug)]
pub enum HistError {
    /// I/O error reading a manifest file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid parameter record (bad binning, inverted axis range).
    #[error("invalid parameters: {0}")]
    Params(String),

    /// Expression parse or evaluation error.
    #[error("expression error: {0}")]
    Expression(String),

    /// Projection error (missing column, mismatched event store).
    #[error("projection error: {0}")]
    Projection(String),
}

/// Result alias for histogram operations.
pub type Result<T> = std::result::Result<T, HistError>;
