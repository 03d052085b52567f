//! Error types for `docpane`
//!
//! Two kinds of failure never reach this module: a non-200 terminal HTTP
//! status and an invalid `file` parameter are rendered into the page itself
//! (see [`crate::page`]). Everything here is a process-level error that ends
//! the run with a mapped exit code.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `docpane` CLI operations, following Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (unreadable file, invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Fetch error (connection failed, timeout, malformed URL)
    pub const FETCH_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type aggregating all domain-specific errors.
#[derive(Debug, Error)]
pub enum DocpaneError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transport-level fetch error
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocpaneError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Fetch(_) => ExitCode::FETCH_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be parsed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Error message from the parser
        message: String,
    },

    /// Configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

// ============================================================================
// Fetch Errors
// ============================================================================

/// Transport-level failures that never produced a terminal HTTP status.
///
/// A request that does complete, whatever its status code, is not an error;
/// it becomes a [`crate::fetch::FetchOutcome`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection or protocol failure before a status was received
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be read or decoded
    #[error("body read error: {0}")]
    Body(String),

    /// The configured timeout elapsed before the request completed
    #[error("request to {url} timed out")]
    Timeout {
        /// URL of the request that timed out
        url: String,
    },

    /// URL could not be parsed or resolved against the page location
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `docpane` operations.
pub type Result<T> = std::result::Result<T, DocpaneError>;

// ============================================================================
// Tests
// ============================================================================
