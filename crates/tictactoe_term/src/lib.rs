//! Terminal front end for two-player tic-tac-toe.
//!
//! The board fills the terminal and is played with left mouse clicks.
//! `r` clears the board (scores are kept), `q` or `Esc` quits.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod tui;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, TermConfig};
