//! Command-line interface for the terminal game.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_grid::ShapeKind;

/// Two-player tic-tac-toe in the terminal, played with the mouse
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Play on a board filling the terminal
    Play {
        /// Which mark moves first (cross or circle), overriding the config
        #[arg(long)]
        first: Option<ShapeKind>,
    },

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Play { first: None })
    }
}
