//! Front-end configuration.

use cross_engine::EngineConfig;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings read from a TOML file.
///
/// ```toml
/// seed = 7
/// show_scores = true
///
/// [engine]
/// cache_enabled = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CrossConfig {
    /// Engine knobs.
    #[serde(default)]
    engine: EngineConfig,

    /// Seed for the tie-break generator; entropy when absent.
    #[serde(default)]
    #[getter(copy)]
    seed: Option<u64>,

    /// Print candidate scores while playing.
    #[serde(default)]
    #[getter(copy)]
    show_scores: bool,
}

impl CrossConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(seed = ?config.seed, show_scores = config.show_scores, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, seed: Option<u64>, show_scores: bool) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self.show_scores |= show_scores;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config: CrossConfig = toml::from_str("").unwrap();
        assert_eq!(config, CrossConfig::default());
        assert!(config.engine().cache_enabled());
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_cli_overrides() {
        let config: CrossConfig = toml::from_str("seed = 3").unwrap();
        let config = config.with_overrides(None, true);
        assert_eq!(config.seed(), Some(3));
        assert!(config.show_scores());

        let config = config.with_overrides(Some(9), false);
        assert_eq!(config.seed(), Some(9));
        assert!(config.show_scores());
    }
}
