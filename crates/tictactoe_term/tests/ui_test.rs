//! Tests for screen rendering.

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use tictactoe_term::{App, TermConfig, ui};

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn click(app: &mut App, column: u16, row: u16) {
    app.handle_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

#[test]
fn test_scores_and_status_rendered() {
    let app = App::new(&TermConfig::default(), 40, 20).unwrap();
    let buffer = render(&app);

    let top = row_text(&buffer, 0);
    assert!(top.contains("Cross: 0"));
    assert!(top.contains("Circle: 0"));
    assert!(row_text(&buffer, 19).contains("Cross to move"));
}

#[test]
fn test_win_banner_rendered() {
    let mut app = App::new(&TermConfig::default(), 40, 20).unwrap();
    // Cross takes the left column.
    for (column, row) in [(8, 4), (20, 4), (8, 9), (20, 9), (8, 15)] {
        click(&mut app, column, row);
    }
    let buffer = render(&app);

    let screen: Vec<String> = (0..20).map(|y| row_text(&buffer, y)).collect();
    assert!(screen.iter().any(|line| line.contains("Player Cross wins")));
    assert!(screen[0].contains("Cross: 1"));
}
