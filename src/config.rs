//! Tour configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings shared by the `play` and `tour` commands.
///
/// Every key is optional in the file; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TourConfig {
    /// Number of cheeses stacked on the first stool.
    #[serde(default = "default_cheeses")]
    cheeses: u32,

    /// Number of stools.
    #[serde(default = "default_stools")]
    stools: usize,

    /// Pause between animated moves, in milliseconds.
    #[serde(default = "default_delay_ms")]
    delay_ms: u64,

    /// Whether the tour prints every intermediate state.
    #[serde(default)]
    animate: bool,
}

fn default_cheeses() -> u32 {
    5
}

fn default_stools() -> usize {
    4
}

fn default_delay_ms() -> u64 {
    500
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            cheeses: default_cheeses(),
            stools: default_stools(),
            delay_ms: default_delay_ms(),
            animate: false,
        }
    }
}

impl TourConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(cheeses = config.cheeses, stools = config.stools, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file if one is given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the cheese count if `cheeses` is given.
    pub fn with_cheeses(mut self, cheeses: Option<u32>) -> Self {
        if let Some(cheeses) = cheeses {
            self.cheeses = cheeses;
        }
        self
    }

    /// Replaces the stool count if `stools` is given.
    pub fn with_stools(mut self, stools: Option<usize>) -> Self {
        if let Some(stools) = stools {
            self.stools = stools;
        }
        self
    }

    /// Replaces the animation delay if `delay_ms` is given.
    pub fn with_delay_ms(mut self, delay_ms: Option<u64>) -> Self {
        if let Some(delay_ms) = delay_ms {
            self.delay_ms = delay_ms;
        }
        self
    }

    /// Turns animation on when `animate` is set; never turns it off.
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate |= animate;
        self
    }

    /// Returns the animation delay as a duration.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
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
    fn test_missing_keys_take_defaults() {
        let config = TourConfig::from_toml("cheeses = 8").unwrap();
        assert_eq!(*config.cheeses(), 8);
        assert_eq!(*config.stools(), 4);
        assert_eq!(*config.delay_ms(), 500);
        assert!(!*config.animate());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(TourConfig::from_toml("").unwrap(), TourConfig::default());
    }

    #[test]
    fn test_bad_toml_is_error() {
        let err = TourConfig::from_toml("cheeses = \"many\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = TourConfig::default()
            .with_cheeses(Some(3))
            .with_stools(None)
            .with_delay_ms(Some(0))
            .with_animate(true);
        assert_eq!(*config.cheeses(), 3);
        assert_eq!(*config.stools(), 4);
        assert_eq!(config.delay(), Duration::ZERO);
        assert!(*config.animate());
    }
}
