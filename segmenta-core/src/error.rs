//! Error types
//!
//! Chunking is a total function and never fails. Errors only arise at the
//! configuration boundary: invalid sizes or an unreadable config file.

use thiserror::Error;

/// Configuration-level errors
#[derive(Error, Debug)]
pub enum ChunkerError {
    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A TOML configuration document could not be parsed
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration file could not be read
    #[error("failed to read configuration file {path}: {reason}")]
    ConfigRead {
        /// The configuration file path
        path: String,
        /// The underlying I/O failure
        reason: String,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ChunkerError>;
