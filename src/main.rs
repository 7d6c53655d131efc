//! tap_tac_toe - terminal entry point

use anyhow::{Context, Result};
use clap::Parser;
use tap_tac_toe::{AppConfig, Cli, Command, init_logging, run_script, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = cli.apply_overrides(config);

    init_logging(config.logging())?;
    info!(command = ?cli.command, "Starting tap_tac_toe");

    match cli.command.clone().unwrap_or_default() {
        Command::Play { .. } => tui::run(&config),
        Command::Script { moves } => {
            println!("{}", run_script(&moves));
            Ok(())
        }
    }
}
