//! Win detection.

use crate::grid::{Cell, Grid, LineKind, WinningLine};
use tracing::instrument;

/// Every line that can win on an `n` x `n` board, in scan order: rows by
/// index, then columns, then the main diagonal, then the anti-diagonal.
fn candidate_lines(n: usize) -> impl Iterator<Item = (LineKind, Vec<(usize, usize)>)> {
    let rows = (0..n).map(move |row| {
        let cells = (0..n).map(|col| (row, col)).collect::<Vec<_>>();
        (LineKind::Row(row), cells)
    });
    let columns = (0..n).map(move |col| {
        let cells = (0..n).map(|row| (row, col)).collect::<Vec<_>>();
        (LineKind::Column(col), cells)
    });
    let diagonal = std::iter::once((LineKind::Diagonal, (0..n).map(|i| (i, i)).collect::<Vec<_>>()));
    let anti_diagonal = std::iter::once((
        LineKind::AntiDiagonal,
        (0..n).map(|i| (i, n - 1 - i)).collect::<Vec<_>>(),
    ));

    rows.chain(columns).chain(diagonal).chain(anti_diagonal)
}

/// Finds the first line whose cells all hold the same kind.
///
/// Returns `None` while no line is complete. When several lines are complete
/// the first in scan order wins the tie.
#[instrument(skip(grid))]
pub fn find_winning_line(grid: &Grid) -> Option<WinningLine> {
    candidate_lines(grid.dimension()).find_map(|(line, cells)| {
        let kind_at = |&(row, col): &(usize, usize)| grid.cell(row, col).and_then(Cell::kind);

        let first = kind_at(cells.first()?)?;
        if !cells.iter().all(|pos| kind_at(pos) == Some(first)) {
            return None;
        }
        Some(WinningLine::new(first, line, cells))
    })
}
