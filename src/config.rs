//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tap_tac_toe.toml";

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "TAP_TAC_TOE_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// Drawing options.
    display: DisplayConfig,
    /// Log output options.
    logging: LoggingConfig,
}

/// Drawing options for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_", into)]
pub struct DisplayConfig {
    /// Terminal rows reserved below the board for the status line.
    status_rows: u16,
    /// Colour of X markers.
    x_color: String,
    /// Colour of O markers.
    o_color: String,
    /// Colour of the grid lines.
    grid_color: String,
    /// Colour of the winning strike-through.
    strike_color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            status_rows: 3,
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
            grid_color: "white".to_string(),
            strike_color: "red".to_string(),
        }
    }
}

/// Log output options.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_", into)]
pub struct LoggingConfig {
    /// Log file; the terminal is owned by the UI so logs never go to stdout.
    file: PathBuf,
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("tap_tac_toe.log"),
            filter: "info".to_string(),
        }
    }
}

/// Resolved drawing colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// X markers.
    pub x: Color,
    /// O markers.
    pub o: Color,
    /// Grid lines.
    pub grid: Color,
    /// Strike-through.
    pub strike: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            grid: Color::White,
            strike: Color::Red,
        }
    }
}

impl DisplayConfig {
    /// Parses the configured colour names.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let parse = |name: &str, value: &str| {
            Color::from_str(value)
                .map_err(|_| ConfigError::new(format!("Invalid {} colour: '{}'", name, value)))
        };
        Ok(Palette {
            x: parse("x_color", &self.x_color)?,
            o: parse("o_color", &self.o_color)?,
            grid: parse("grid_color", &self.grid_color)?,
            strike: parse("strike_color", &self.strike_color)?,
        })
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.display.palette()?;
        Ok(config)
    }

    /// Resolves the configuration source and loads it.
    ///
    /// An explicit path must exist. Without one, the file named by
    /// [`CONFIG_ENV_VAR`] is used, then [`DEFAULT_CONFIG_FILE`] if present,
    /// then built-in defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            debug!(%path, "Using config from environment");
            return Self::from_file(path);
        }
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::from_file(default_path);
        }
        debug!("No config file found, using defaults");
        Ok(Self::default())
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
