//! Configuration for the terminal game.

use crate::games::tictactoe::HistoryMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a persisted game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Directory holding one file per store key.
    #[serde(default = "default_store_dir")]
    store_dir: PathBuf,

    /// What each history entry records.
    #[serde(default)]
    history_mode: HistoryMode,
}

#[instrument]
fn default_store_dir() -> PathBuf {
    PathBuf::from(".tictactoe")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            history_mode: HistoryMode::default(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument(skip(store_dir), fields(store_dir = %store_dir.display()))]
    pub fn new(store_dir: PathBuf, history_mode: HistoryMode) -> Self {
        Self {
            store_dir,
            history_mode,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            store_dir = %config.store_dir.display(),
            history_mode = %config.history_mode,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file absent, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of this configuration.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        store_dir: Option<PathBuf>,
        history_mode: Option<HistoryMode>,
    ) -> Self {
        if let Some(dir) = store_dir {
            self.store_dir = dir;
        }
        if let Some(mode) = history_mode {
            self.history_mode = mode;
        }
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
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str(r#"history_mode = "marks""#).unwrap();
        assert_eq!(config.history_mode(), &HistoryMode::Marks);
        assert_eq!(config.store_dir(), &PathBuf::from(".tictactoe"));
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::default()
            .with_overrides(Some(PathBuf::from("/tmp/game")), None);
        assert_eq!(config.store_dir(), &PathBuf::from("/tmp/game"));
        assert_eq!(config.history_mode(), &HistoryMode::Snapshots);
    }
}
