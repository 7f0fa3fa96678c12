//! Core error types for lunara-core.
//!
//! The engine itself is total over well-formed dates; errors only arise at
//! the boundaries -- parsing user-supplied date strings and reading/writing
//! the config and journal files.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lunara-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Journal storage errors
    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),

    /// A date string from the outside world that did not parse.
    /// Engine functions are never called with malformed dates; this is
    /// raised before their inputs are built.
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Journal storage errors.
#[derive(Error, Debug)]
pub enum JournalError {
    /// Failed to load the journal file
    #[error("Failed to load journal from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save the journal file
    #[error("Failed to save journal to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// No entry recorded for the requested date
    #[error("No journal entry for {date}")]
    NotFound { date: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
