//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_grid::{MAX_CELLS, ShapeKind};
use tracing::{debug, info, instrument};

/// Complete front-end configuration.
///
/// Every section and field is optional in the file; missing values fall back
/// to the defaults below.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
pub struct TermConfig {
    /// Board layout.
    #[serde(default)]
    board: BoardConfig,

    /// Turn order.
    #[serde(default)]
    game: GameConfig,

    /// Terminal presentation.
    #[serde(default)]
    display: DisplayConfig,

    /// Log output.
    #[serde(default)]
    log: LogConfig,
}

/// Board layout in terminal cells.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Rows and columns on the board.
    #[serde(default = "default_dimension")]
    dimension: usize,

    /// Gap between the terminal edge and the board.
    #[serde(default = "default_cell_margin")]
    cell_margin: f64,

    /// Gap between a cell edge and the mark drawn in it.
    #[serde(default = "default_shape_margin")]
    shape_margin: f64,
}

/// Turn order.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Kind that places the first mark.
    #[serde(default = "default_first")]
    first: ShapeKind,
}

/// Terminal presentation.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Terminal window title.
    #[serde(default = "default_title")]
    title: String,
}

/// Log output. The terminal is owned by the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file path.
    #[serde(default = "default_log_file")]
    file: PathBuf,

    /// `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    filter: String,
}

fn default_dimension() -> usize {
    MAX_CELLS
}

fn default_cell_margin() -> f64 {
    2.0
}

fn default_shape_margin() -> f64 {
    1.0
}

fn default_first() -> ShapeKind {
    ShapeKind::Cross
}

fn default_title() -> String {
    "Tic Tac Toe".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            cell_margin: default_cell_margin(),
            shape_margin: default_shape_margin(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first: default_first(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            filter: default_log_filter(),
        }
    }
}

impl TermConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(dimension = config.board.dimension, first = %config.game.first, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Overrides which kind moves first.
    pub fn with_first(mut self, first: ShapeKind) -> Self {
        self.game.first = first;
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
