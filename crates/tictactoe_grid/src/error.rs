//! Error types for board construction and placement.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// The board layout cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Display, Error)]
pub enum GridError {
    /// The board needs at least one row and one column.
    #[display("Grid dimension must be at least 1")]
    InvalidDimension,

    /// The margin swallows the whole area, or a parameter is not finite.
    #[display("Layout {width}x{height} with margin {margin} leaves no playable area")]
    InvalidLayout {
        /// Requested total width.
        width: f64,
        /// Requested total height.
        height: f64,
        /// Requested margin.
        margin: f64,
    },
}

/// A mark could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Error)]
pub enum PlaceError {
    /// The cell already holds a mark.
    #[display("Cell ({row}, {column}) is already occupied")]
    CellOccupied {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        column: usize,
    },

    /// The board is won or drawn; it must be reset first.
    #[display("Game is already over")]
    GameOver,

    /// The coordinates are outside the board.
    #[display("No cell at ({row}, {column})")]
    NoCell {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
}
