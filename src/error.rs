//! Error types for doxnav
//!
//! Error hierarchy for navigation data handling plus the exit codes the
//! CLI maps each failure class to.

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for doxnav CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Data error (malformed navigation data, validation failure)
    pub const DATA_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for doxnav operations.
///
/// Aggregates the domain-specific errors and provides a unified
/// interface for exit code mapping at the CLI boundary.
#[derive(Debug, Error)]
pub enum DoxnavError {
    /// Navigation data representation error
    #[error(transparent)]
    Nav(#[from] NavError),

    /// Validation produced failures
    #[error("{count} validation failure(s)")]
    Validation {
        /// Number of findings counted as failures
        count: usize,
    },

    /// No built-in index with the requested name
    #[error("no built-in index named \"{name}\"")]
    UnknownBuiltin {
        /// The name that was requested
        name: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DoxnavError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Nav(_) | Self::Json(_) | Self::Validation { .. } => ExitCode::DATA_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::UnknownBuiltin { .. } => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Navigation Data Errors
// ============================================================================

/// Navigation data representation errors.
///
/// Cover the failure modes of reading the `var <symbol> = [...];` form
/// and its JSON payload. Lookup misses are not errors; absence of an
/// enum type is an empty result.
#[derive(Debug, Error)]
pub enum NavError {
    /// The file does not start with a `var <symbol> =` prelude.
    #[error("not a navigation data file: {0}")]
    MissingPrelude(String),

    /// The payload is not terminated by `;`.
    #[error("navigation data payload is not terminated by ';'")]
    MissingTerminator,

    /// The payload between `=` and `;` failed to parse as JSON.
    #[error("payload error: {0}")]
    Payload(#[from] serde_json::Error),

    /// A top-level row does not have the `[name, anchor, members]` shape.
    #[error("malformed entry at index {index}: {message}")]
    MalformedEntry {
        /// Position of the row in the top-level array
        index: usize,
        /// Description of the shape mismatch
        message: String,
    },

    /// A member row does not have the `[name, anchor, null]` shape.
    #[error("malformed member {index} of \"{type_name}\": {message}")]
    MalformedMember {
        /// Enum type the member row belongs to
        type_name: String,
        /// Position of the row in the member array
        index: usize,
        /// Description of the shape mismatch
        message: String,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for doxnav operations.
pub type Result<T> = std::result::Result<T, DoxnavError>;

// ============================================================================
// Tests
// ============================================================================
