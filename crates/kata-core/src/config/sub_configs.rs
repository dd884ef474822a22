//! Sub-configuration structures for kata components.
//!
//! This module contains the individual configuration structs
//! that make up the main `Config` structure.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Log levels accepted by the CLI subscriber.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Output formats accepted by the CLI subscriber.
pub const LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl LoggingConfig {
    /// Validate the logging configuration.
    pub fn validate(&self) -> CoreResult<()> {
        if !LOG_LEVELS.contains(&self.level.as_str()) {
            return Err(CoreError::ConfigError(format!(
                "logging.level must be one of {:?}, got '{}'",
                LOG_LEVELS, self.level
            )));
        }
        if !LOG_FORMATS.contains(&self.format.as_str()) {
            return Err(CoreError::ConfigError(format!(
                "logging.format must be one of {:?}, got '{}'",
                LOG_FORMATS, self.format
            )));
        }
        Ok(())
    }
}

/// Limits applied to tree traversals.
///
/// Both limits default to `None` (unlimited), so a traversal yields
/// every reachable node.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Nodes deeper than this are still yielded but their children are not expanded.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Stop after this many nodes have been yielded.
    #[serde(default)]
    pub max_nodes: Option<usize>,
}

impl TraversalConfig {
    /// Validate the traversal configuration.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_nodes == Some(0) {
            return Err(CoreError::ConfigError(
                "traversal.max_nodes must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Grid word search configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Compare grid letters and the target word without regard to case.
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive: bool,

    /// Upper bound on path extensions tried before the search gives up
    /// (None = unbounded).
    #[serde(default)]
    pub max_steps: Option<u64>,
}

fn default_case_insensitive() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_insensitive: default_case_insensitive(),
            max_steps: None,
        }
    }
}

impl SearchConfig {
    /// Validate the search configuration.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_steps == Some(0) {
            return Err(CoreError::ConfigError(
                "search.max_steps must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
