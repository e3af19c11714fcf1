//! Error types for the fraud detector
//!
//! This module defines all error types that can occur while loading
//! transactions, configuring the engine, running detection and exporting
//! results. Errors are designed to be descriptive and user-friendly for CLI
//! output.
//!
//! # Error Categories
//!
//! - **Configuration Errors**: non-positive batch size or time window
//! - **File I/O Errors**: file not found, permission denied, etc.
//! - **Parsing Errors**: malformed CSV/JSON rows, bad amounts or timestamps
//! - **Execution Errors**: runtime construction failures, panicking batch workers

use thiserror::Error;

/// Main error type for the fraud detector
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectionError {
    /// A configuration value is out of range
    ///
    /// Raised before any partitioning or rule evaluation happens, so a
    /// run never produces partial results with a bad configuration.
    #[error("Invalid configuration for {parameter}: {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: String,
        /// Why the value was rejected
        reason: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A transaction record could not be parsed
    ///
    /// Surfaced by the input adapters only. The engine itself accepts any
    /// well-typed transaction.
    #[error("Malformed transaction{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedTransaction {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Results could not be written to the export destination
    #[error("Export failed: {message}")]
    ExportError {
        /// Description of the failure
        message: String,
    },

    /// The async runtime could not be created
    #[error("Runtime error: {message}")]
    RuntimeError {
        /// Description of the failure
        message: String,
    },

    /// A batch worker terminated abnormally
    #[error("Batch worker panicked: {message}")]
    BatchPanicked {
        /// Panic or join error description
        message: String,
    },
}

// Conversion from io::Error to DetectionError
impl From<std::io::Error> for DetectionError {
    fn from(error: std::io::Error) -> Self {
        DetectionError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to DetectionError
impl From<csv::Error> for DetectionError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        DetectionError::MalformedTransaction {
            line,
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to DetectionError
impl From<serde_json::Error> for DetectionError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return DetectionError::IoError {
                message: error.to_string(),
            };
        }

        let line = u64::try_from(error.line()).ok().filter(|&l| l > 0);

        DetectionError::MalformedTransaction {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl DetectionError {
    /// Create an InvalidConfiguration error
    pub fn invalid_configuration(parameter: &str, reason: impl Into<String>) -> Self {
        DetectionError::InvalidConfiguration {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a MalformedTransaction error
    pub fn malformed_transaction(line: Option<u64>, message: impl Into<String>) -> Self {
        DetectionError::MalformedTransaction {
            line,
            message: message.into(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        DetectionError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create an ExportError
    pub fn export_error(message: impl Into<String>) -> Self {
        DetectionError::ExportError {
            message: message.into(),
        }
    }
}
