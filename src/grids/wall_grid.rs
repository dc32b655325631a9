use std::fmt;

use crate::error::{MazeError, Result};
use crate::grids::{cell_to_slot, wall_between, Cell, Dimensions, Neighborhood, SlotKind};

/// A maze over the doubled "brick" grid.
///
/// Slot `(2r+1, 2c+1)` is logical cell `(r, c)`, a slot with one odd and one
/// even index is the wall between two cells, and even/even slots are corners
/// that stay walled. Wall state and path marks are kept in two parallel
/// arrays since they change independently.
#[derive(Debug, Clone)]
pub struct WallGrid {
    /// logical cell dimensions
    pub cells: Dimensions,
    /// wall grid dimensions, always `2 * cells + 1`
    pub dims: Dimensions,

    walls: Vec<bool>,
    path: Vec<bool>,
}

impl WallGrid {
    /// Builds a fully walled grid. Even sizes are rounded down, so `12x12`
    /// gives the same `11x11` wall grid as `11x11`.
    pub fn with_dims(rows: usize, columns: usize) -> Result<Self> {
        let logical_rows = rows.saturating_sub(1) / 2;
        let logical_cols = columns.saturating_sub(1) / 2;
        if logical_rows < 1 || logical_cols < 1 {
            return Err(MazeError::InvalidDimension {
                rows,
                cols: columns,
            });
        }

        let dims = Dimensions {
            rows: 2 * logical_rows + 1,
            columns: 2 * logical_cols + 1,
        };
        let area = dims.checked_area().ok_or(MazeError::InvalidDimension {
            rows,
            cols: columns,
        })?;
        log::debug!(
            "new {}x{} wall grid ({}x{} cells) for requested {}x{}",
            dims.rows,
            dims.columns,
            logical_rows,
            logical_cols,
            rows,
            columns
        );

        Ok(Self {
            cells: Dimensions {
                rows: logical_rows,
                columns: logical_cols,
            },
            walls: vec![true; area],
            path: vec![false; area],
            dims,
        })
    }

    #[inline]
    fn index_of(&self, row: usize, column: usize) -> Result<usize> {
        if !self.dims.contains(row, column) {
            return Err(MazeError::OutOfBounds {
                row,
                col: column,
                rows: self.dims.rows,
                cols: self.dims.columns,
            });
        }

        Ok((self.dims.columns * row) + column)
    }

    /// `(actual_rows, actual_cols)` of the wall grid
    pub fn dimensions(&self) -> (usize, usize) {
        (self.dims.rows, self.dims.columns)
    }

    pub fn logical_dims(&self) -> (usize, usize) {
        (self.cells.rows, self.cells.columns)
    }

    /// bottom right logical cell, the default solve target
    pub fn last_cell(&self) -> Cell {
        (self.cells.rows - 1, self.cells.columns - 1)
    }

    pub fn contains_cell(&self, cell: Cell) -> bool {
        self.cells.contains(cell.0, cell.1)
    }

    pub(crate) fn check_cell(&self, cell: Cell) -> Result<()> {
        if self.contains_cell(cell) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                row: cell.0,
                col: cell.1,
                rows: self.cells.rows,
                cols: self.cells.columns,
            })
        }
    }

    pub fn is_wall(&self, row: usize, column: usize) -> Result<bool> {
        Ok(self.walls[self.index_of(row, column)?])
    }

    pub fn is_wall_open(&self, row: usize, column: usize) -> Result<bool> {
        self.is_wall(row, column).map(|wall| !wall)
    }

    pub fn set_wall(&mut self, row: usize, column: usize, value: bool) -> Result<bool> {
        let index = self.index_of(row, column)?;
        let prev = self.walls[index];
        self.walls[index] = value;
        Ok(prev)
    }

    pub fn is_on_path(&self, row: usize, column: usize) -> Result<bool> {
        Ok(self.path[self.index_of(row, column)?])
    }

    pub fn set_on_path(&mut self, row: usize, column: usize, value: bool) -> Result<bool> {
        let index = self.index_of(row, column)?;
        let prev = self.path[index];
        self.path[index] = value;
        Ok(prev)
    }

    pub fn clear_path(&mut self) {
        self.path = vec![false; self.path.len()];
    }

    /// Opens the slot of a logical cell.
    pub fn open_cell(&mut self, cell: Cell) -> Result<()> {
        let (row, column) = cell_to_slot(cell);
        self.set_wall(row, column, false)?;
        Ok(())
    }

    /// Knocks down the wall shared by two adjacent cells.
    pub fn open_between(&mut self, one: Cell, two: Cell) -> Result<()> {
        let (row, column) = self.wall_slot(one, two)?;
        self.set_wall(row, column, false)?;
        Ok(())
    }

    pub fn is_passage(&self, one: Cell, two: Cell) -> Result<bool> {
        let (row, column) = self.wall_slot(one, two)?;
        self.is_wall_open(row, column)
    }

    pub(crate) fn wall_slot(&self, one: Cell, two: Cell) -> Result<(usize, usize)> {
        self.check_cell(one)?;
        self.check_cell(two)?;
        wall_between(one, two).ok_or(MazeError::NotAdjacent {
            from: one,
            to: two,
        })
    }

    pub fn neighbors_of(&self, row: usize, column: usize) -> Neighborhood {
        Neighborhood::new((row, column), self.cells)
    }

    /// Number of open slots between two cells. Equals `cells - 1` on a
    /// perfect maze.
    pub fn open_wall_count(&self) -> usize {
        let mut count = 0;
        for row in 1..self.dims.rows - 1 {
            for column in 1..self.dims.columns - 1 {
                // exactly one odd coordinate means a wall slot
                if (row + column) % 2 == 1 && !self.walls[self.dims.columns * row + column] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Logical cells currently marked as on the path, row major.
    pub fn path_cells(&self) -> Vec<Cell> {
        let mut marked = Vec::new();
        for row in 0..self.cells.rows {
            for column in 0..self.cells.columns {
                let (s_row, s_col) = cell_to_slot((row, column));
                if self.path[self.dims.columns * s_row + s_col] {
                    marked.push((row, column));
                }
            }
        }
        marked
    }

    /// Number of marked slots of any kind.
    pub fn path_len(&self) -> usize {
        self.path.iter().filter(|marked| **marked).count()
    }

    pub fn slot_kind(&self, row: usize, column: usize) -> Result<SlotKind> {
        Ok(self.kind_at(self.index_of(row, column)?))
    }

    #[inline]
    fn kind_at(&self, index: usize) -> SlotKind {
        if self.path[index] {
            SlotKind::Path
        } else if self.walls[index] {
            SlotKind::Wall
        } else {
            SlotKind::Open
        }
    }
}

impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dims.rows {
            let line: String = (0..self.dims.columns)
                .map(|column| char::from(self.kind_at(self.dims.columns * row + column)))
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
