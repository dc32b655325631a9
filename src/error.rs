use thiserror::Error;

use crate::grids::Cell;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// requested dimensions leave no room for a single logical cell
    #[error("a {rows}x{cols} grid has no logical cells, need at least 3x3")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("slot ({row}, {col}) is outside the {rows}x{cols} wall grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cells {from:?} and {to:?} are not adjacent")]
    NotAdjacent { from: Cell, to: Cell },
}

pub type Result<T> = std::result::Result<T, MazeError>;
