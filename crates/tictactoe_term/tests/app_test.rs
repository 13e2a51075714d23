//! Tests for terminal event handling.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tictactoe_grid::{Outcome, ShapeKind};
use tictactoe_term::{App, TermConfig};

// 40 x 20 terminal, margin 2: cells are 12 columns by 16/3 rows.
fn app() -> App {
    App::new(&TermConfig::default(), 40, 20).unwrap()
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Terminal cell roughly in the middle of board cell `(row, column)`.
fn cell(row: u16, column: u16) -> (u16, u16) {
    (2 + column * 12 + 6, 2 + row * 5 + 2)
}

fn play(app: &mut App, moves: &[(u16, u16)]) {
    for &(row, column) in moves {
        let (x, y) = cell(row, column);
        app.handle_event(click(x, y));
    }
}

#[test]
fn test_initial_status() {
    let app = app();
    assert_eq!(app.status_message(), "Cross to move");
    assert!(!app.should_quit());
}

#[test]
fn test_click_places_mark() {
    let mut app = app();
    play(&mut app, &[(1, 1)]);

    let grid = app.game().grid();
    assert_eq!(grid.cell(1, 1).and_then(|c| c.kind()), Some(ShapeKind::Cross));
    assert_eq!(app.status_message(), "Circle to move");
}

#[test]
fn test_click_in_margin_ignored() {
    let mut app = app();
    app.handle_event(click(0, 0));
    app.handle_event(click(39, 19));
    assert!(app.game().grid().cells().iter().all(|c| c.is_empty()));
    assert_eq!(app.status_message(), "Cross to move");
}

#[test]
fn test_occupied_click_reports_error() {
    let mut app = app();
    play(&mut app, &[(0, 0), (0, 0)]);
    assert_eq!(app.status_message(), "Cell (0, 0) is already occupied");
    assert_eq!(app.game().next_kind(), ShapeKind::Circle);
}

#[test]
fn test_win_then_click_restarts() {
    let mut app = app();
    play(&mut app, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(app.game().outcome().winner(), Some(ShapeKind::Cross));
    assert_eq!(
        app.status_message(),
        "Player Cross wins! Click or press 'r' to play again."
    );
    assert_eq!(app.game().scores().get("Cross"), 1);

    play(&mut app, &[(1, 0)]);
    assert_eq!(app.game().outcome(), &Outcome::InProgress);
    assert!(app.game().grid().cells().iter().all(|c| c.is_empty()));
    assert_eq!(app.game().scores().get("Cross"), 1);
}

#[test]
fn test_restart_key_keeps_scores() {
    let mut app = app();
    play(&mut app, &[(0, 0), (1, 1)]);
    app.handle_event(key(KeyCode::Char('r')));

    assert!(app.game().grid().cells().iter().all(|c| c.is_empty()));
    assert_eq!(app.status_message(), "Cross to move");
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    app.handle_event(key(KeyCode::Char('x')));
    assert!(!app.should_quit());
    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());

    let mut app = self::app();
    app.handle_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn test_resize_relayouts_board() {
    let mut app = app();
    play(&mut app, &[(2, 2)]);
    app.handle_event(Event::Resize(80, 40));

    let grid = app.game().grid();
    assert_eq!(grid.width(), 80.0);
    let hit = grid.at_vector(tictactoe_grid::Vec2::new(70.0, 35.0)).unwrap();
    assert_eq!((*hit.row(), *hit.column()), (2, 2));
    assert_eq!(hit.kind(), Some(ShapeKind::Cross));
}

#[test]
fn test_resize_too_small_keeps_layout() {
    let mut app = app();
    app.handle_event(Event::Resize(3, 3));
    assert_eq!(app.game().grid().width(), 40.0);
    assert!(app.status_message().contains("too small"));

    app.handle_event(Event::Resize(40, 20));
    assert_eq!(app.status_message(), "Cross to move");
}

#[test]
fn test_too_small_terminal_rejected() {
    assert!(App::new(&TermConfig::default(), 4, 4).is_err());
}
