//! Error types for Beamer slide-deck conversion.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during slide-deck conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open, read, or write a file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to serialize the slide deck to JSON.
    #[error("JSON serialization error: {0}")]
    JsonError(String),

    /// The source document could not be processed at all.
    #[error("Invalid source document: {0}")]
    InvalidSource(String),
}
