//! Application state and input handling.

use crate::config::TermConfig;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use tictactoe_grid::{ClickOutcome, Game, Grid, GridError, Outcome, Vec2};
use tracing::{debug, info, instrument, warn};

/// Main application state.
///
/// The board is laid over the whole terminal, one unit per terminal cell.
pub struct App {
    game: Game,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates the application for a `width` x `height` terminal.
    #[instrument(skip(config))]
    pub fn new(config: &TermConfig, width: u16, height: u16) -> Result<Self, GridError> {
        let board = config.board();
        let grid = Grid::new(
            Vec2::ZERO,
            f64::from(width),
            f64::from(height),
            *board.dimension(),
            *board.cell_margin(),
        )?;
        let game = Game::new(grid, *config.game().first(), *board.shape_margin());
        let status_message = status_for(&game);

        info!("Application ready");
        Ok(Self {
            game,
            status_message,
            should_quit: false,
        })
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    debug!("Quit requested");
                    self.should_quit = true;
                }
                KeyCode::Char('r') => self.restart(),
                _ => {}
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.click(column, row),
            Event::Resize(width, height) => self.resize(width, height),
            _ => {}
        }
    }

    /// Handles a left click on terminal cell `(column, row)`.
    #[instrument(skip(self))]
    pub fn click(&mut self, column: u16, row: u16) {
        let point = Vec2::new(f64::from(column) + 0.5, f64::from(row) + 0.5);

        match self.game.click(point) {
            ClickOutcome::Missed => {}
            ClickOutcome::Rejected(error) => {
                self.status_message = error.to_string();
            }
            ClickOutcome::Placed { outcome, .. } => {
                if outcome.is_resolved() {
                    self.log_final_board();
                }
                self.status_message = status_for(&self.game);
            }
            ClickOutcome::Restarted => {
                self.status_message = status_for(&self.game);
            }
        }
    }

    /// Clears the board; scores are kept.
    pub fn restart(&mut self) {
        debug!("Restarting board");
        self.game.reset();
        self.status_message = status_for(&self.game);
    }

    /// Lays the board out over a resized terminal.
    #[instrument(skip(self))]
    pub fn resize(&mut self, width: u16, height: u16) {
        match self
            .game
            .relayout(Vec2::ZERO, f64::from(width), f64::from(height))
        {
            Ok(()) => self.status_message = status_for(&self.game),
            Err(error) => {
                warn!(%error, "Terminal too small for the board");
                self.status_message = "Terminal too small, enlarge it to keep playing.".to_string();
            }
        }
    }

    fn log_final_board(&self) {
        match serde_json::to_string(self.game.grid()) {
            Ok(json) => debug!(board = %json, "Board resolved"),
            Err(error) => warn!(%error, "Could not serialize board"),
        }
    }
}

fn status_for(game: &Game) -> String {
    match game.outcome() {
        Outcome::InProgress => format!("{} to move", game.next_kind()),
        resolved => format!("{}! Click or press 'r' to play again.", resolved),
    }
}
