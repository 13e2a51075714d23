//! Click-driven game session.
//!
//! Ties one [`Grid`], one [`ShapeDecider`] and one [`ScoreKeeper`] together
//! behind a single entry point the front end calls for every click.

use crate::decider::ShapeDecider;
use crate::error::{GridError, PlaceError};
use crate::geometry::Vec2;
use crate::grid::{Grid, Outcome};
use crate::score::ScoreKeeper;
use crate::shape::ShapeKind;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What a click did to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// The click landed outside every cell.
    Missed,
    /// The click hit a cell but no mark was placed. The turn is not used up.
    Rejected(PlaceError),
    /// A mark was placed and the board re-evaluated.
    Placed {
        /// Row of the marked cell.
        row: usize,
        /// Column of the marked cell.
        column: usize,
        /// Kind of mark placed.
        kind: ShapeKind,
        /// Board state after the placement.
        outcome: Outcome,
    },
    /// The board was resolved; the click cleared it for the next game.
    Restarted,
}

/// A two-player game played by clicking on a laid-out board.
///
/// Scores and turn order carry over from one board to the next.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    grid: Grid,
    decider: ShapeDecider,
    scores: ScoreKeeper,
    shape_margin: f64,
}

impl Game {
    /// Starts a session on `grid`; `first` places the first mark.
    #[instrument(skip(grid), fields(dimension = grid.dimension()))]
    pub fn new(grid: Grid, first: ShapeKind, shape_margin: f64) -> Self {
        Self {
            grid,
            decider: ShapeDecider::new(first),
            scores: ScoreKeeper::new(),
            shape_margin,
        }
    }

    /// The board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Win tally across every board played in this session.
    pub fn scores(&self) -> &ScoreKeeper {
        &self.scores
    }

    /// Kind that the next placement will use.
    pub fn next_kind(&self) -> ShapeKind {
        self.decider.peek()
    }

    /// Current board state.
    pub fn outcome(&self) -> &Outcome {
        self.grid.outcome()
    }

    /// Handles a click at `point`.
    ///
    /// On a resolved board any click restarts it. Otherwise the hit cell gets
    /// the next mark and the board is checked for a win or draw.
    #[instrument(skip(self))]
    pub fn click(&mut self, point: Vec2) -> ClickOutcome {
        if self.grid.outcome().is_resolved() {
            self.grid.reset();
            info!("Board restarted");
            return ClickOutcome::Restarted;
        }

        let Some(cell) = self.grid.at_vector(point) else {
            return ClickOutcome::Missed;
        };
        let (row, column) = (*cell.row(), *cell.column());
        if !cell.is_empty() {
            debug!(row, column, "Cell already marked");
            return ClickOutcome::Rejected(PlaceError::CellOccupied { row, column });
        }

        let kind = self.decider.peek();
        if let Err(error) = self.grid.place(row, column, kind, self.shape_margin) {
            return ClickOutcome::Rejected(error);
        }
        self.decider.next();
        let outcome = self.grid.check_win(&mut self.scores).clone();
        info!(row, column, %kind, %outcome, "Mark placed");

        ClickOutcome::Placed {
            row,
            column,
            kind,
            outcome,
        }
    }

    /// Clears the board without touching scores or turn order.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid.reset();
    }

    /// Moves the board to a new screen rectangle, e.g. after a resize.
    ///
    /// # Errors
    ///
    /// Propagates [`GridError::InvalidLayout`]; the board is unchanged.
    pub fn relayout(&mut self, origin: Vec2, width: f64, height: f64) -> Result<(), GridError> {
        self.grid.relayout(origin, width, height)
    }
}
