//! Error types for irkit.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`IrkitError`] enum.
//!
//! # Examples
//!
//! ```
//! use irkit::error::{IrkitError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(IrkitError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for irkit operations.
#[derive(Error, Debug)]
pub enum IrkitError {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis errors (tokenization, normalization, bad offsets)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Index-related errors (posting list ordering, dictionary lookups)
    #[error("Index error: {0}")]
    Index(String),

    /// Invalid argument passed by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors raised by user-supplied collaborators
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with IrkitError.
pub type Result<T> = std::result::Result<T, IrkitError>;

impl IrkitError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        IrkitError::Analysis(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        IrkitError::Index(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        IrkitError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        IrkitError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = IrkitError::index("Test index error");
        assert_eq!(error.to_string(), "Index error: Test index error");

        let error = IrkitError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = IrkitError::invalid_argument("bad");
        assert_eq!(error.to_string(), "Invalid argument: bad");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = IrkitError::from(io_error);

        match error {
            IrkitError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_anyhow_conversion() {
        fn collaborator() -> anyhow::Result<()> {
            anyhow::bail!("normalizer exploded")
        }

        fn caller() -> Result<()> {
            collaborator()?;
            Ok(())
        }

        let error = caller().unwrap_err();
        assert!(matches!(error, IrkitError::Anyhow(_)));
        assert!(error.to_string().contains("normalizer exploded"));
    }
}
