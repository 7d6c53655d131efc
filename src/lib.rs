//! tap_tac_toe - tic-tac-toe played by tapping cells in the terminal
//!
//! The game logic lives in [`tap_tac_toe_rules`]; this crate supplies the
//! pieces around it.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with CLI overrides
//! - **Logging**: tracing to a file, so the terminal stays clean
//! - **TUI**: crossterm mouse/keypad input and ratatui canvas drawing
//! - **Script**: headless play of a fixed move list

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod script;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{
    AppConfig, CONFIG_ENV_VAR, ConfigError, DEFAULT_CONFIG_FILE, DisplayConfig, LoggingConfig,
    Palette,
};
pub use logging::init as init_logging;
pub use script::run_script;

pub use tap_tac_toe_rules as rules;
