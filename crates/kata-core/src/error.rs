//! Error types for kata-core.
//!
//! This module defines the central error type [`CoreError`] used throughout
//! the kata-core crate, along with the [`CoreResult<T>`] type alias.
//!
//! # Examples
//!
//! ```rust
//! use kata_core::CoreError;
//!
//! fn parse_pattern(pattern: &str) -> Result<(), CoreError> {
//!     Err(CoreError::InvalidInput(format!("cannot expand `{pattern}`")))
//! }
//!
//! assert!(parse_pattern("{a,b").is_err());
//! ```

use thiserror::Error;

/// Top-level error type for kata-core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input violates the contract of the called operation.
    ///
    /// # When This Occurs
    ///
    /// - Brace pattern with an unmatched `{` or `}`
    /// - Values that fail a documented precondition and are cheap to detect
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration is invalid or could not be loaded.
    ///
    /// # When This Occurs
    ///
    /// - Invalid configuration value (zero limits, unknown log level)
    /// - Malformed TOML file
    /// - Environment variable parsing failure
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// IO error while reading configuration or input files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
