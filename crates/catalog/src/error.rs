//! Error types for the catalog crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - `#[from]` conversions so `?` works on `std::io::Error`
//! - Error messages that carry where the failure happened

use thiserror::Error;

/// Errors that can occur while loading the movie catalog
///
/// Every variant is fatal: a process that fails to load its catalog
/// must not start answering queries.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Data file could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the data source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The source is not an array of movie records
    ///
    /// `line` and `column` come from the JSON parser and point at the
    /// first byte it could not make sense of.
    #[error("Parse error at line {line}, column {column} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        column: usize,
        reason: String,
    },
}

impl DataLoadError {
    /// Wrap a serde_json error with the name of the source it came from
    pub(crate) fn from_json(file: &str, err: serde_json::Error) -> Self {
        // serde_json reports I/O failures through the same error type
        if err.is_io() {
            return DataLoadError::IoError(err.into());
        }
        DataLoadError::ParseError {
            file: file.to_string(),
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
