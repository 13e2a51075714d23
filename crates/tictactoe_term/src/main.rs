//! Tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tictactoe_term::{Cli, Command, TermConfig, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TermConfig::load(&cli.config)?;

    match cli.command() {
        Command::Play { first } => {
            let config = match first {
                Some(kind) => config.with_first(kind),
                None => config,
            };
            initialize_tracing(&config)?;
            info!(config_path = %cli.config.display(), "Starting tic-tac-toe");
            tui::run(&config)
        }
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Sends logs to the configured file so they do not interfere with the UI.
fn initialize_tracing(config: &TermConfig) -> Result<()> {
    let log = config.log();
    let log_file = std::fs::File::create(log.file())
        .with_context(|| format!("Failed to create log file {}", log.file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
