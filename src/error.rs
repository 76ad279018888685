//! Error types for the Sylph library.
//!
//! All errors are represented by the [`SylphError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use sylph::error::{Result, SylphError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(SylphError::config("prefix length cannot be zero"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sylph operations.
///
/// This enum represents all possible errors that can occur in the library.
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for creating specific error
/// types.
#[derive(Error, Debug)]
pub enum SylphError {
    /// I/O errors (dictionary files that cannot be opened or read)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (a tunable outside its documented domain)
    #[error("Config error: {0}")]
    Config(String),

    /// A lookup was requested with an edit distance the index cannot serve
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Dictionary-related errors (invalid load arguments, etc.)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SylphError.
pub type Result<T> = std::result::Result<T, SylphError>;

impl SylphError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SylphError::Config(msg.into())
    }

    /// Create a new out-of-range error.
    pub fn out_of_range<S: Into<String>>(msg: S) -> Self {
        SylphError::OutOfRange(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        SylphError::Dictionary(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SylphError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SylphError::config("prefixLength must be greater than maxDictionaryEditDistance");
        assert_eq!(
            error.to_string(),
            "Config error: prefixLength must be greater than maxDictionaryEditDistance"
        );

        let error = SylphError::out_of_range("distance too large");
        assert_eq!(error.to_string(), "Out of range: distance too large");

        let error = SylphError::dictionary("corpus path cannot be empty");
        assert_eq!(error.to_string(), "Dictionary error: corpus path cannot be empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let sylph_error = SylphError::from(io_error);

        match sylph_error {
            SylphError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
