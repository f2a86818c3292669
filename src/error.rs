//! Error types for tweetsplit
//!
//! Every stage of the pipeline returns `Result<T, Error>` where Error is
//! defined here. Nothing is recovered: errors propagate to `main`, which
//! prints them and exits non-zero.

use std::path::Path;
use thiserror::Error;

/// The main error type for tweetsplit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed row at line {line}: expected at least {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Invalid timestamp '{value}': {message}")]
    InvalidTimestamp { value: String, message: String },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Output error: {message}")]
    Output { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a file-not-found error for a path
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::FileNotFound {
            path: path.as_ref().display().to_string(),
        }
    }

    /// Create a malformed row error
    pub fn malformed_row(line: u64, expected: usize, found: usize) -> Self {
        Self::MalformedRow {
            line,
            expected,
            found,
        }
    }

    /// Create an invalid timestamp error
    pub fn invalid_timestamp(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Wrap an I/O failure on `path` as an output error
    pub fn output_io(action: &str, path: impl AsRef<Path>, err: std::io::Error) -> Self {
        Self::Output {
            message: format!("Failed to {action} {}: {err}", path.as_ref().display()),
        }
    }

    /// Whether the error came from reading or interpreting the input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::FileNotFound { .. }
                | Error::Csv(_)
                | Error::MalformedRow { .. }
                | Error::InvalidTimestamp { .. }
        )
    }
}

/// Result type alias for tweetsplit
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::file_not_found("tweets.csv");
        assert_eq!(err.to_string(), "File not found: tweets.csv");

        let err = Error::malformed_row(4, 10, 3);
        assert_eq!(
            err.to_string(),
            "Malformed row at line 4: expected at least 10 fields, found 3"
        );

        let err = Error::invalid_timestamp("yesterday", "input contains invalid characters");
        assert_eq!(
            err.to_string(),
            "Invalid timestamp 'yesterday': input contains invalid characters"
        );
    }

    #[test]
    fn test_output_io_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::output_io("create", "out/2020-01-01.json", io);
        assert_eq!(
            err.to_string(),
            "Output error: Failed to create out/2020-01-01.json: denied"
        );
    }

    #[test]
    fn test_is_input_error() {
        assert!(Error::file_not_found("x.csv").is_input_error());
        assert!(Error::malformed_row(2, 10, 1).is_input_error());
        assert!(Error::invalid_timestamp("", "empty").is_input_error());

        assert!(!Error::output("boom").is_input_error());
        assert!(!Error::config("bad").is_input_error());
    }
}
