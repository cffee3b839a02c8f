//! Error types for the Contrail library.
//!
//! All fallible operations return [`ContrailError`] through the [`Result`]
//! alias. Only dataset loading, configuration parsing and the optional strict
//! filter validation can fail; filtering, aggregation and classification are
//! total over their inputs.
//!
//! # Examples
//!
//! ```
//! use contrail::error::{ContrailError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ContrailError::load("missing column 'airline'"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Contrail operations.
#[derive(Error, Debug)]
pub enum ContrailError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dataset loading errors (missing source, missing column, invalid row)
    #[error("Load error: {0}")]
    Load(String),

    /// Filter state rejected by strict validation
    #[error("Filter error: {0}")]
    Filter(String),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// CSV decoding errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ContrailError.
pub type Result<T> = std::result::Result<T, ContrailError>;

impl ContrailError {
    /// Create a new load error.
    pub fn load<S: Into<String>>(msg: S) -> Self {
        ContrailError::Load(msg.into())
    }

    /// Create a new filter error.
    pub fn filter<S: Into<String>>(msg: S) -> Self {
        ContrailError::Filter(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ContrailError::Config(msg.into())
    }

    /// Whether this error should be surfaced as a dataset load failure.
    ///
    /// I/O and CSV failures raised while reading the source count as load
    /// failures too.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            ContrailError::Load(_) | ContrailError::Io(_) | ContrailError::Csv(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ContrailError::load("no such column");
        assert_eq!(error.to_string(), "Load error: no such column");

        let error = ContrailError::filter("inverted range");
        assert_eq!(error.to_string(), "Filter error: inverted range");

        let error = ContrailError::config("max_words must be positive");
        assert_eq!(
            error.to_string(),
            "Configuration error: max_words must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = ContrailError::from(io_error);

        match error {
            ContrailError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_parser_errors_convert() {
        fn parse_json(text: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(text)?)
        }
        fn read_rows(text: &str) -> Result<usize> {
            let mut reader = csv::Reader::from_reader(text.as_bytes());
            let mut rows = 0;
            for row in reader.records() {
                row?;
                rows += 1;
            }
            Ok(rows)
        }

        let error = parse_json("{").unwrap_err();
        assert!(matches!(error, ContrailError::Json(_)));
        assert!(!error.is_load_failure());

        assert_eq!(read_rows("a,b\n1,2\n").unwrap(), 1);
        let error = read_rows("a,b\n1,2,3\n").unwrap_err();
        assert!(matches!(error, ContrailError::Csv(_)));
        assert!(error.is_load_failure());
    }

    #[test]
    fn test_load_failure_classification() {
        assert!(ContrailError::load("x").is_load_failure());
        assert!(ContrailError::from(io::Error::other("x")).is_load_failure());
        assert!(!ContrailError::config("x").is_load_failure());
        assert!(!ContrailError::filter("x").is_load_failure());
    }
}
