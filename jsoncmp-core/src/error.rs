//! Custom error types for jsoncmp.
//!
//! Setup errors are fatal and surface as [`BenchError`]. Errors raised while an
//! adapter operation runs are [`OperationError`]s; they are recorded against the
//! one measurement that produced them and never abort the run.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::AdapterName;

/// Top-level error type for harness setup.
/// Any of these stops the process before or between suites.
#[derive(Debug, Error)]
pub enum BenchError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Registry Errors
    // =========================================================================
    #[error("Adapter already registered: {0}")]
    DuplicateAdapter(AdapterName),

    #[error("Unknown suite: {name}")]
    UnknownSuite { name: String },

    // =========================================================================
    // Input and Fixture Errors
    // =========================================================================
    #[error("Failed to load sample {path}: {source}")]
    Sample {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create fixture {path}: {reason}")]
    Fixture { path: PathBuf, reason: String },

    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Validation errors for configuration values and names.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Duplicate suite operation: {operation}")]
    DuplicateSuite { operation: String },

    #[error("Schema validation failed: {message}")]
    SchemaValidation { message: String },
}

/// Failure of a single adapter operation.
///
/// The message is what the report shows in place of the bar.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("{0}")]
    Library(String),

    #[error("JSON not valid")]
    InvalidJson,

    #[error("fixture {0} not available")]
    MissingFixture(&'static str),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl OperationError {
    /// Wrap an error reported by the library under test.
    pub fn library(err: impl fmt::Display) -> Self {
        OperationError::Library(err.to_string())
    }
}

/// Result type alias using BenchError.
pub type BenchResult<T> = Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidFieldValue {
            field: "bar_unit",
            value: "0".to_string(),
            reason: "must be between 1 and 40".to_string(),
        };
        assert!(err.to_string().contains("bar_unit"));
        assert!(err.to_string().contains("between 1 and 40"));
    }

    #[test]
    fn test_error_chain() {
        let validation_err = ValidationError::DuplicateSuite {
            operation: "parse".to_string(),
        };
        let bench_err: BenchError = validation_err.into();
        assert!(matches!(bench_err, BenchError::Validation(_)));
    }

    #[test]
    fn test_operation_error_keeps_library_text() {
        let err = OperationError::library("expected value at line 1 column 1");
        assert_eq!(err.to_string(), "expected value at line 1 column 1");
        assert_eq!(OperationError::InvalidJson.to_string(), "JSON not valid");
    }
}
