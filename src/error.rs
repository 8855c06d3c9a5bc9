//! Error types for training-session conversion.
//!
//! This module provides error handling for the pulsetrail library. All errors
//! implement the `std::error::Error` trait and carry structured context.
//!
//! ## Error Categories
//!
//! - **File Errors**: an input file could not be opened or read
//! - **Write Errors**: an output destination could not be created or written
//! - **Schema Errors**: a field table failed validation
//! - **Inflate Errors**: a gzip/zlib payload could not be decompressed
//! - **Session Errors**: no exercise produced any usable data
//!
//! Most decode-level problems never surface as errors: the decoder logs them
//! and keeps the partial result. Only the conditions above reach callers.
//!
//! ## Helper Constructors
//!
//! ```rust
//! use pulsetrail::ConvertError;
//! use std::path::PathBuf;
//!
//! let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
//! let path = PathBuf::from("/data/v2-users-0000000-training-sessions-1-create");
//! let file_error = ConvertError::file_error(path, io_err);
//! assert!(file_error.is_retryable());
//!
//! let empty = ConvertError::no_exercises("/data/v2-users-0000000-training-sessions-1");
//! assert!(!empty.is_retryable());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

/// Main error type for conversion operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("Failed to read {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Decompression failed: {details}")]
    Inflate { details: String },

    #[error("Invalid {kind} schema: {reason}")]
    Schema { kind: String, reason: String },

    #[error("No exercise data found for {base_name}")]
    NoExercises { base_name: PathBuf },

    #[error("Invalid export options: {details}")]
    Config { details: String },

    #[error("Failed to serialize {what}: {details}")]
    Serialize { what: String, details: String },
}

impl ConvertError {
    /// Returns whether repeating the operation could succeed once the environment changes.
    pub fn is_retryable(&self) -> bool {
        match self {
            ConvertError::File { .. } => true,
            ConvertError::Write { .. } => true,
            ConvertError::NoExercises { .. } => false,
            ConvertError::Inflate { .. } => false,
            ConvertError::Schema { .. } => false,
            ConvertError::Config { .. } => false,
            ConvertError::Serialize { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            ConvertError::File { .. } => vec![
                "Check the file exists and is readable",
                "Verify the training session was fully synchronised",
                "Check file permissions",
            ],
            ConvertError::Write { .. } => vec![
                "Check the output directory exists",
                "Ensure sufficient disk space",
                "Check write permissions on the destination",
            ],
            ConvertError::Inflate { .. } => vec![
                "Verify the file is a complete gzip or zlib stream",
                "Re-synchronise the session from the device",
            ],
            ConvertError::Schema { .. } => vec![
                "Check field paths are slash-joined field numbers",
                "Declare every parent path as an embedded message",
                "Remove duplicate field paths",
            ],
            ConvertError::NoExercises { .. } => vec![
                "Check the base name points at a training session",
                "Verify exercise files follow the <base>-exercises-<id>-<kind> naming",
                "Make sure at least one exercise file is non-empty",
            ],
            ConvertError::Config { .. } => vec![
                "Check the options file is valid YAML",
                "Remove unknown or misspelt keys",
            ],
            ConvertError::Serialize { .. } => vec![
                "Check the session paths are valid UTF-8",
            ],
        }
    }

    /// Helper constructor for input file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        ConvertError::File { path, source }
    }

    /// Helper constructor for output file errors with path context.
    pub fn write_error(path: PathBuf, source: std::io::Error) -> Self {
        ConvertError::Write { path, source }
    }

    /// Helper constructor for sessions without any usable exercise.
    pub fn no_exercises(base_name: impl Into<PathBuf>) -> Self {
        ConvertError::NoExercises { base_name: base_name.into() }
    }

    /// Helper constructor for decompression failures.
    pub fn inflate_failed(details: impl Into<String>) -> Self {
        ConvertError::Inflate { details: details.into() }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}

impl From<serde_yaml_ng::Error> for ConvertError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        ConvertError::Config { details: err.to_string() }
    }
}
