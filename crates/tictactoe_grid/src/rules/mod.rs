//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`]. They read cell contents only and never
//! touch the grid's session state, so they can be evaluated at any time.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::find_winning_line;

use crate::grid::{Grid, Outcome};
use tracing::instrument;

/// Classifies the board: a completed line wins, otherwise a full board is a
/// draw, otherwise play continues.
#[instrument(skip(grid))]
pub fn evaluate(grid: &Grid) -> Outcome {
    if let Some(line) = find_winning_line(grid) {
        Outcome::Won(line)
    } else if is_full(grid) {
        Outcome::Drawn
    } else {
        Outcome::InProgress
    }
}
