//! The board: cell layout, hit testing, placement and session state.

use crate::error::{GridError, PlaceError};
use crate::geometry::{Rect, Vec2};
use crate::rules;
use crate::score::ScoreKeeper;
use crate::shape::{Shape, ShapeKind};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument};

/// Side length of the standard board.
pub const MAX_CELLS: usize = 3;

/// One square of the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Cell {
    row: usize,
    column: usize,
    /// Screen-space area used for hit testing.
    bounds: Rect,
    shape: Option<Shape>,
}

impl Cell {
    fn empty(row: usize, column: usize, bounds: Rect) -> Self {
        Self {
            row,
            column,
            bounds,
            shape: None,
        }
    }

    /// Minimum corner of the cell bounds.
    pub fn start(&self) -> Vec2 {
        self.bounds.min
    }

    /// Kind of the mark held, if any.
    pub fn kind(&self) -> Option<ShapeKind> {
        self.shape.as_ref().map(|shape| *shape.kind())
    }

    /// Checks if the cell holds no mark.
    pub fn is_empty(&self) -> bool {
        self.shape.is_none()
    }

    /// Puts a mark in the cell.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::CellOccupied`] if the cell already holds a mark;
    /// the existing mark is kept.
    #[instrument(skip(self, shape), fields(row = self.row, column = self.column, kind = %shape.kind()))]
    pub fn set(&mut self, shape: Shape) -> Result<(), PlaceError> {
        if !self.is_empty() {
            return Err(PlaceError::CellOccupied {
                row: self.row,
                column: self.column,
            });
        }
        self.shape = Some(shape);
        Ok(())
    }

    fn clear(&mut self) {
        self.shape = None;
    }
}

/// Which line of the board completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// A full row, by index.
    Row(usize),
    /// A full column, by index.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// A completed line and the cells forming it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct WinningLine {
    kind: ShapeKind,
    line: LineKind,
    /// `(row, column)` of each cell, in scan order.
    cells: Vec<(usize, usize)>,
}

impl WinningLine {
    /// Checks if the cell at `(row, column)` is part of the line.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.cells.contains(&(row, column))
    }
}

/// State of the board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Placements are accepted.
    #[default]
    InProgress,
    /// A line is complete.
    Won(WinningLine),
    /// Every cell is marked and no line is complete.
    Drawn,
}

impl Outcome {
    /// Returns true once the board is won or drawn.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning kind if there is one.
    pub fn winner(&self) -> Option<ShapeKind> {
        self.winning_line().map(|line| *line.kind())
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            Outcome::Won(line) => Some(line),
            Outcome::InProgress | Outcome::Drawn => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(line) => write!(f, "Player {} wins", line.kind()),
            Outcome::Drawn => write!(f, "Draw"),
        }
    }
}

/// An N x N board laid out over a rectangle of screen space.
///
/// The playable area is the layout rectangle shrunk by `margin` on every
/// side; it is split into N x N equal cells stored in row-major order. The
/// number of cells is fixed at construction.
///
/// The board also carries its [`Outcome`]: once it is won or drawn every
/// placement is refused until [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    origin: Vec2,
    width: f64,
    height: f64,
    dimension: usize,
    margin: f64,
    cells: Vec<Cell>,
    outcome: Outcome,
    /// Whether the current win has been credited to a [`ScoreKeeper`].
    scored: bool,
}

impl Grid {
    /// Lays out a `dimension` x `dimension` board.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidDimension`] for a zero dimension,
    /// [`GridError::InvalidLayout`] if the margin leaves no playable area or a
    /// parameter is not finite.
    #[instrument]
    pub fn new(
        origin: Vec2,
        width: f64,
        height: f64,
        dimension: usize,
        margin: f64,
    ) -> Result<Self, GridError> {
        let bounds = cell_bounds(origin, width, height, dimension, margin)?;
        let cells = bounds
            .into_iter()
            .enumerate()
            .map(|(index, bounds)| Cell::empty(index / dimension, index % dimension, bounds))
            .collect();

        debug!("Grid laid out");
        Ok(Self {
            origin,
            width,
            height,
            dimension,
            margin,
            cells,
            outcome: Outcome::InProgress,
            scored: false,
        })
    }

    /// Lays out the standard 3 x 3 board.
    pub fn standard(origin: Vec2, width: f64, height: f64, margin: f64) -> Result<Self, GridError> {
        Self::new(origin, width, height, MAX_CELLS, margin)
    }

    /// Minimum corner of the layout rectangle.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Total layout width, margin included.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Total layout height, margin included.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of rows (and columns).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Gap between the layout edge and the outer cells.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Current state of the board as of the last evaluation.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.dimension && column < self.dimension).then_some(row * self.dimension + column)
    }

    /// Cell at `(row, column)`, if on the board.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.index(row, column).map(|index| &self.cells[index])
    }

    /// Cell whose bounds contain `point`, or `None` for the margin and
    /// anything off the board.
    #[instrument(level = "debug", skip(self))]
    pub fn at_vector(&self, point: Vec2) -> Option<&Cell> {
        let cell = self.cells.iter().find(|cell| cell.bounds.contains(point));
        debug!(hit = ?cell.map(|c| (c.row, c.column)), "Hit test");
        cell
    }

    /// Places a `kind` mark at `(row, column)`, drawn `shape_margin` inside
    /// the cell edges.
    ///
    /// The board is not evaluated; call [`check_win`](Self::check_win) after.
    ///
    /// # Errors
    ///
    /// [`PlaceError::GameOver`] once the board is won or drawn,
    /// [`PlaceError::NoCell`] off the board, [`PlaceError::CellOccupied`] if
    /// the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn place(
        &mut self,
        row: usize,
        column: usize,
        kind: ShapeKind,
        shape_margin: f64,
    ) -> Result<&Cell, PlaceError> {
        if self.outcome.is_resolved() {
            return Err(PlaceError::GameOver);
        }
        let index = self
            .index(row, column)
            .ok_or(PlaceError::NoCell { row, column })?;

        let cell = &mut self.cells[index];
        let bounds = cell.bounds;
        cell.set(Shape::fit(bounds, kind, shape_margin))?;
        debug!("Mark placed");
        Ok(&self.cells[index])
    }

    /// Re-reads the board and updates its outcome.
    ///
    /// No score is credited here; a win found by this call is credited by
    /// the next [`check_win`](Self::check_win).
    #[instrument(skip(self))]
    pub fn evaluate(&mut self) -> &Outcome {
        self.outcome = rules::evaluate(self);
        &self.outcome
    }

    /// Evaluates the board and credits the winner.
    ///
    /// Each win is credited exactly once, even if [`evaluate`](Self::evaluate)
    /// saw it first; checking a board whose win is already credited changes
    /// nothing.
    #[instrument(skip(self, scores))]
    pub fn check_win(&mut self, scores: &mut ScoreKeeper) -> &Outcome {
        self.evaluate();

        match &self.outcome {
            Outcome::Won(line) if !self.scored => {
                info!(kind = %line.kind(), line = ?line.line(), "Board won");
                scores.increment(line.kind().as_str());
                self.scored = true;
            }
            Outcome::Drawn => debug!("Board drawn"),
            _ => {}
        }
        &self.outcome
    }

    /// Clears every mark and reopens the board. Scores are not touched.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
        self.outcome = Outcome::InProgress;
        self.scored = false;
        debug!("Grid reset");
    }

    /// Lays the board out over a new rectangle, keeping marks and state.
    ///
    /// Dimension and margin are unchanged. Placed shapes are refitted to
    /// their cell's new bounds.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidLayout`] if the new size leaves no playable area;
    /// the grid is left as it was.
    #[instrument(skip(self))]
    pub fn relayout(&mut self, origin: Vec2, width: f64, height: f64) -> Result<(), GridError> {
        let bounds = cell_bounds(origin, width, height, self.dimension, self.margin)?;

        for (cell, bounds) in self.cells.iter_mut().zip(bounds) {
            cell.bounds = bounds;
            if let Some(shape) = cell.shape.take() {
                cell.shape = Some(Shape::fit(bounds, *shape.kind(), *shape.margin()));
            }
        }
        self.origin = origin;
        self.width = width;
        self.height = height;
        debug!("Grid relaid out");
        Ok(())
    }
}

/// Row-major bounds of every cell.
///
/// Edges are computed once per axis so neighbouring cells share exact
/// coordinates, and the last edge is pinned to the interior maximum.
fn cell_bounds(
    origin: Vec2,
    width: f64,
    height: f64,
    dimension: usize,
    margin: f64,
) -> Result<Vec<Rect>, GridError> {
    if dimension == 0 {
        return Err(GridError::InvalidDimension);
    }
    let usable = origin.is_finite()
        && width.is_finite()
        && height.is_finite()
        && margin.is_finite()
        && margin >= 0.0
        && width - 2.0 * margin > 0.0
        && height - 2.0 * margin > 0.0;
    if !usable {
        return Err(GridError::InvalidLayout {
            width,
            height,
            margin,
        });
    }

    let interior = Rect::from_origin_size(origin, width, height).inset(margin);
    let xs = edges(interior.min.x, interior.max.x, dimension);
    let ys = edges(interior.min.y, interior.max.y, dimension);

    Ok((0..dimension)
        .flat_map(|row| (0..dimension).map(move |column| (row, column)))
        .map(|(row, column)| {
            Rect::new(
                Vec2::new(xs[column], ys[row]),
                Vec2::new(xs[column + 1], ys[row + 1]),
            )
        })
        .collect())
}

fn edges(start: f64, end: f64, count: usize) -> Vec<f64> {
    (0..=count)
        .map(|i| {
            if i == count {
                end
            } else {
                start + (end - start) * i as f64 / count as f64
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_pin_last_value() {
        let xs = edges(0.1, 0.7, 3);
        assert_eq!(xs.len(), 4);
        assert_eq!(xs[0], 0.1);
        assert_eq!(xs[3], 0.7);
    }

    #[test]
    fn test_cells_are_row_major() {
        let grid = Grid::standard(Vec2::ZERO, 300.0, 300.0, 0.0).expect("valid layout");
        let coords: Vec<_> = grid.cells().iter().map(|c| (*c.row(), *c.column())).collect();
        assert_eq!(coords[1], (0, 1));
        assert_eq!(coords[3], (1, 0));
        assert_eq!(grid.cell(2, 1).map(Cell::start), Some(Vec2::new(100.0, 200.0)));
        assert!(grid.cell(3, 0).is_none());
    }

    #[test]
    fn test_set_keeps_first_mark() {
        let mut cell = Cell::empty(0, 0, Rect::from_origin_size(Vec2::ZERO, 10.0, 10.0));
        let bounds = *cell.bounds();
        cell.set(Shape::fit(bounds, ShapeKind::Cross, 1.0)).expect("empty cell");

        let err = cell
            .set(Shape::fit(bounds, ShapeKind::Circle, 1.0))
            .expect_err("occupied");
        assert_eq!(err, PlaceError::CellOccupied { row: 0, column: 0 });
        assert_eq!(cell.kind(), Some(ShapeKind::Cross));
    }

    #[test]
    fn test_outcome_display() {
        let line = WinningLine::new(ShapeKind::Circle, LineKind::Diagonal, vec![(0, 0)]);
        assert_eq!(Outcome::Won(line).to_string(), "Player Circle wins");
        assert_eq!(Outcome::Drawn.to_string(), "Draw");
    }
}
