//! Error types for fill-file generation

use thiserror::Error;

/// Fill-file operation result type
pub type Result<T> = std::result::Result<T, FillError>;

/// Fill-file operation errors
#[derive(Error, Debug)]
pub enum FillError {
    /// The byte count could not be parsed as a non-negative integer literal
    #[error("invalid byte count '{literal}': {reason}")]
    InvalidLength { literal: String, reason: String },

    /// The fill value could not be parsed as an integer literal
    #[error("invalid fill value '{literal}': {reason}")]
    InvalidFillValue { literal: String, reason: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
