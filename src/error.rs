//! Error types for the litrisk library.
//!
//! All fallible operations return [`LitriskError`] through the crate-wide
//! [`Result`] alias. Analysis itself never fails; errors come from building
//! a pattern catalog, reading input records, or the command line surface.
//!
//! # Examples
//!
//! ```
//! use litrisk::error::{LitriskError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LitriskError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for litrisk operations.
#[derive(Error, Debug)]
pub enum LitriskError {
    /// I/O errors (reading catalog files, record files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A pattern in a category failed to compile.
    #[error("Pattern error in category '{category}' for /{pattern}/: {source}")]
    Pattern {
        category: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Catalog definition errors (bad names, duplicates, empty pattern lists)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input parsing errors (malformed records)
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LitriskError.
pub type Result<T> = std::result::Result<T, LitriskError>;

impl LitriskError {
    /// Create a new pattern compilation error.
    pub fn pattern<C: Into<String>, P: Into<String>>(
        category: C,
        pattern: P,
        source: regex::Error,
    ) -> Self {
        LitriskError::Pattern {
            category: category.into(),
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        LitriskError::Catalog(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LitriskError::Config(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        LitriskError::Parse(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LitriskError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LitriskError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        LitriskError::Other(format!("Internal error: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LitriskError::catalog("duplicate category 'defamation'");
        assert_eq!(
            error.to_string(),
            "Catalog error: duplicate category 'defamation'"
        );

        let error = LitriskError::parse("line 3: expected object");
        assert_eq!(error.to_string(), "Parse error: line 3: expected object");

        let error = LitriskError::invalid_argument("no input");
        assert_eq!(error.to_string(), "Error: Invalid argument: no input");
    }

    #[test]
    fn test_pattern_error_names_category() {
        let source = regex::Regex::new(r"(unclosed").unwrap_err();
        let error = LitriskError::pattern("antitrust", "(unclosed", source);

        let message = error.to_string();
        assert!(message.contains("antitrust"));
        assert!(message.contains("(unclosed"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let litrisk_error = LitriskError::from(io_error);

        match litrisk_error {
            LitriskError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
