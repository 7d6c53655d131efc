//! Command-line interface for tap_tac_toe.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tap_tac_toe_rules::Coord;

use crate::config::AppConfig;

/// Tap-to-play tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tap_tac_toe")]
#[command(about = "Click a cell to place a marker; click again after the game to restart", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the log file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Override the log filter (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Play in the terminal with mouse or keypad input
    Play {
        /// Terminal rows reserved for the status line
        #[arg(long)]
        status_rows: Option<u16>,
    },

    /// Play a fixed sequence of moves and print the final board
    Script {
        /// Cells as `row,col` (0-2) or keypad digits (1-9), X first
        #[arg(required = true)]
        moves: Vec<Coord>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { status_rows: None }
    }
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(file) = &self.log_file {
            let logging = config.logging().clone().with_file(file.clone());
            config = config.with_logging(logging);
        }
        if let Some(filter) = &self.log_filter {
            let logging = config.logging().clone().with_filter(filter.clone());
            config = config.with_logging(logging);
        }
        if let Some(Command::Play {
            status_rows: Some(rows),
        }) = &self.command
        {
            let display = config.display().clone().with_status_rows(*rows);
            config = config.with_display(display);
        }
        config
    }
}
