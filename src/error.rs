//! Error types for the Orthus library.
//!
//! This module provides error handling for all Orthus operations. All errors
//! are represented by the [`OrthusError`] enum.
//!
//! # Examples
//!
//! ```
//! use orthus::error::{OrthusError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(OrthusError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Orthus operations.
///
/// This enum represents all possible errors that can occur in the Orthus
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum OrthusError {
    /// I/O errors (dictionary file reading, console output, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary-related errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with OrthusError.
pub type Result<T> = std::result::Result<T, OrthusError>;

impl OrthusError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        OrthusError::Dictionary(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        OrthusError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        OrthusError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrthusError::dictionary("word list is empty");
        assert_eq!(err.to_string(), "Dictionary error: word list is empty");

        let err = OrthusError::invalid_argument("capacity must be non-zero");
        assert_eq!(
            err.to_string(),
            "Error: Invalid argument: capacity must be non-zero"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "dictionary.txt");
        let err: OrthusError = io_err.into();
        assert!(matches!(err, OrthusError::Io(_)));
    }
}
