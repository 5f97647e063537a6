//! Error types for freightlog.
//!
//! A single error enum covers the whole pipeline. Configuration problems are
//! reported before any simulation runs; I/O and CSV failures abort the export
//! immediately, there is no retry or partial-write recovery.

use thiserror::Error;

/// All freightlog errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected configuration (unknown size selector, out-of-range delay
    /// probability). Raised before any events are generated.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// I/O error while creating or writing the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization or write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for freightlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a configuration rejection.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Error::InvalidConfiguration(_))
    }

    /// Check if this error came from the filesystem or the CSV writer.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Csv(_))
    }
}
