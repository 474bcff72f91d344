use std::path::Path;

use log::warn;

use crate::ai::Depth;
use crate::error::ConfigError;
use crate::game::{Connect4, MAX_DIM};

/// Board dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { rows: 6, cols: 7 }
    }
}

/// Search settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to look ahead; -1 searches to the end of the game.
    pub depth: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { depth: 4 }
    }
}

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DIM).contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in 1..={MAX_DIM}"
            )));
        }
        if !(1..=MAX_DIM).contains(&self.board.cols) {
            return Err(ConfigError::Validation(format!(
                "board.cols must be in 1..={MAX_DIM}"
            )));
        }
        if self.search.depth < -1 {
            return Err(ConfigError::Validation(
                "search.depth must be >= -1".into(),
            ));
        }
        Ok(())
    }

    /// Build the rules engine for the configured board.
    pub fn engine(&self) -> Result<Connect4, ConfigError> {
        Connect4::new(self.board.rows, self.board.cols)
    }

    pub fn depth(&self) -> Depth {
        Depth::from_raw(self.search.depth)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
