//! Draw detection.

use crate::grid::Grid;
use tracing::instrument;

/// Checks if every cell holds a mark.
///
/// A full board with no winning line is a draw.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|cell| !cell.is_empty())
}
