//! Error types for core module
//!
//! Provides custom error types for match configuration loading and saving.

use thiserror::Error;

/// Errors that can occur while reading or writing a match configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file I/O error
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config serialization/deserialization error
    #[error("Config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Config parsed but describes an unplayable match
    #[error("Invalid config: {message}")]
    Invalid { message: String },
}

/// Result type alias for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;
