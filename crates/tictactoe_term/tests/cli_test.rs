//! Tests for command-line parsing.

use clap::Parser;
use tictactoe_grid::ShapeKind;
use tictactoe_term::{Cli, Command};

#[test]
fn test_no_subcommand_plays() {
    let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
    assert_eq!(cli.command(), Command::Play { first: None });
    assert_eq!(cli.config.to_str(), Some("tictactoe.toml"));
}

#[test]
fn test_play_with_first_kind() {
    let cli = Cli::try_parse_from(["tictactoe", "play", "--first", "circle"]).unwrap();
    assert_eq!(
        cli.command(),
        Command::Play {
            first: Some(ShapeKind::Circle)
        }
    );
}

#[test]
fn test_config_subcommand_with_path() {
    let cli = Cli::try_parse_from(["tictactoe", "config", "--config", "other.toml"]).unwrap();
    assert_eq!(cli.command(), Command::Config);
    assert_eq!(cli.config.to_str(), Some("other.toml"));
}

#[test]
fn test_unknown_kind_rejected() {
    assert!(Cli::try_parse_from(["tictactoe", "play", "--first", "square"]).is_err());
}
