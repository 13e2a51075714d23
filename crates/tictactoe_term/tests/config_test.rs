//! Tests for configuration loading.

use std::io::Write;
use tictactoe_grid::ShapeKind;
use tictactoe_term::TermConfig;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TermConfig::load(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, TermConfig::default());
    assert_eq!(*config.board().dimension(), 3);
    assert_eq!(*config.board().cell_margin(), 2.0);
    assert_eq!(*config.game().first(), ShapeKind::Cross);
    assert_eq!(config.display().title(), "Tic Tac Toe");
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[game]\nfirst = \"Circle\"\n\n[board]\nshape_margin = 0.5").unwrap();

    let config = TermConfig::load(file.path()).unwrap();
    assert_eq!(*config.game().first(), ShapeKind::Circle);
    assert_eq!(*config.board().shape_margin(), 0.5);
    assert_eq!(*config.board().dimension(), 3);
    assert_eq!(config.log().filter(), "info");
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[game]\nfirst = \"Triangle\"").unwrap();

    let err = TermConfig::load(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_toml_round_trip() {
    let config = TermConfig::default().with_first(ShapeKind::Circle);
    let text = config.to_toml().unwrap();
    assert!(text.contains("first = \"Circle\""));
    assert_eq!(TermConfig::from_toml(&text).unwrap(), config);
}
