//! Tic-tac-toe board model for click-driven front ends.
//!
//! The crate knows nothing about drawing or input devices. A front end lays
//! a [`Grid`] over a rectangle of its screen space, forwards clicks as
//! points, and draws whatever the board reports.
//!
//! # Architecture
//!
//! - **Shape**: a player's mark and where it is drawn inside its cell
//! - **ShapeDecider**: strict turn alternation
//! - **Grid**: cell layout, hit testing, win/draw detection, reset
//! - **ScoreKeeper**: win counts that outlive individual boards
//! - **Game**: one session wiring the above to a single `click` entry point
//!
//! # Example
//!
//! ```
//! use tictactoe_grid::{ClickOutcome, Game, Grid, ShapeKind, Vec2};
//!
//! # fn main() -> Result<(), tictactoe_grid::GridError> {
//! let grid = Grid::standard(Vec2::ZERO, 300.0, 300.0, 0.0)?;
//! let mut game = Game::new(grid, ShapeKind::Cross, 5.0);
//!
//! let outcome = game.click(Vec2::new(50.0, 50.0));
//! assert!(matches!(outcome, ClickOutcome::Placed { row: 0, column: 0, .. }));
//! assert_eq!(game.next_kind(), ShapeKind::Circle);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod decider;
mod error;
mod game;
mod geometry;
mod grid;
pub mod rules;
mod score;
mod shape;

pub use decider::ShapeDecider;
pub use error::{GridError, PlaceError};
pub use game::{ClickOutcome, Game};
pub use geometry::{Rect, Vec2};
pub use grid::{Cell, Grid, LineKind, MAX_CELLS, Outcome, WinningLine};
pub use score::ScoreKeeper;
pub use shape::{Outline, Segment, Shape, ShapeKind};
