//! Configuration management for the kata workspace.

mod sub_configs;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CoreError, CoreResult};

pub use sub_configs::{LoggingConfig, SearchConfig, TraversalConfig, LOG_FORMATS, LOG_LEVELS};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub traversal: TraversalConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{KATA_ENV}.toml (environment-specific)
    /// 3. Environment variables with KATA__ prefix (e.g. `KATA__SEARCH__MAX_STEPS`)
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("KATA_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix("KATA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        tracing::debug!(env = %env, "configuration loaded");
        Ok(config)
    }

    /// Configuration with every default applied.
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "configuration loaded from file");
        Ok(config)
    }

    /// Validate configuration values. Fails on the first invalid section.
    pub fn validate(&self) -> CoreResult<()> {
        self.logging.validate()?;
        self.traversal.validate()?;
        self.search.validate()?;
        Ok(())
    }
}
