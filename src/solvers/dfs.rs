use crate::error::Result;
use crate::grids::{cell_to_slot, Cell, Neighborhood, WallGrid};
use crate::solvers::Pathfinder;

struct Frame {
    cell: Cell,
    neighbors: Neighborhood,
    // mark the slot carried before this search touched it
    was_marked: bool,
}

/// Depth first path finder with an explicit stack.
///
/// Cells are marked on the way down and restored on backtrack, so only the
/// winning branch stays marked. Connecting walls are marked once the finish
/// is reached.
#[derive(Debug, Default)]
pub struct Dfs {
    visited: Vec<bool>,
    explored: usize,
}

impl Dfs {
    pub fn new() -> Self {
        Self::default()
    }

    /// cells entered during the last search
    pub fn explored(&self) -> usize {
        self.explored
    }

    fn enter(&mut self, grid: &mut WallGrid, stack: &mut Vec<Frame>, cell: Cell) -> Result<()> {
        let (row, column) = cell_to_slot(cell);
        let was_marked = grid.set_on_path(row, column, true)?;
        self.visited[grid.cells.columns * cell.0 + cell.1] = true;
        self.explored += 1;
        stack.push(Frame {
            cell,
            neighbors: grid.neighbors_of(cell.0, cell.1),
            was_marked,
        });
        Ok(())
    }
}

impl Pathfinder for Dfs {
    fn find_path(&mut self, grid: &mut WallGrid, start: Cell, finish: Cell) -> Result<bool> {
        grid.check_cell(start)?;
        grid.check_cell(finish)?;

        self.visited = vec![false; grid.cells.area()];
        self.explored = 0;
        let mut stack = Vec::new();
        self.enter(grid, &mut stack, start)?;

        while let Some(frame) = stack.last_mut() {
            if frame.cell == finish {
                for pair in stack.windows(2) {
                    let (row, column) = grid.wall_slot(pair[0].cell, pair[1].cell)?;
                    grid.set_on_path(row, column, true)?;
                }
                log::debug!(
                    "path {:?} -> {:?}: {} cells, {} explored",
                    start,
                    finish,
                    stack.len(),
                    self.explored
                );
                return Ok(true);
            }

            let mut next = None;
            while let Some((neighbor, _)) = frame.neighbors.next() {
                if !self.visited[grid.cells.columns * neighbor.0 + neighbor.1]
                    && grid.is_passage(frame.cell, neighbor)?
                {
                    next = Some(neighbor);
                    break;
                }
            }

            match next {
                Some(cell) => self.enter(grid, &mut stack, cell)?,
                None => {
                    if let Some(done) = stack.pop() {
                        let (row, column) = cell_to_slot(done.cell);
                        grid.set_on_path(row, column, done.was_marked)?;
                    }
                }
            }
        }

        log::debug!(
            "no path {:?} -> {:?} after exploring {} cells",
            start,
            finish,
            self.explored
        );
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;

    /// Opens every cell and the listed passages.
    fn hand_carved(rows: usize, cols: usize, passages: &[(Cell, Cell)]) -> WallGrid {
        let mut grid = WallGrid::with_dims(rows, cols).unwrap();
        let (logical_rows, logical_cols) = grid.logical_dims();
        for row in 0..logical_rows {
            for column in 0..logical_cols {
                grid.open_cell((row, column)).unwrap();
            }
        }
        for &(one, two) in passages {
            grid.open_between(one, two).unwrap();
        }
        grid
    }

    #[test]
    fn start_equal_to_finish() {
        let mut grid = hand_carved(3, 3, &[]);
        assert!(Dfs::new().find_path(&mut grid, (0, 0), (0, 0)).unwrap());
        assert_eq!(grid.path_len(), 1);
        assert!(grid.is_on_path(1, 1).unwrap());
    }

    #[test]
    fn marks_only_the_winning_branch() {
        // (1, 0) is a dead end and comes first in neighbor order
        let mut grid = hand_carved(
            5,
            7,
            &[((0, 0), (1, 0)), ((0, 0), (0, 1)), ((0, 1), (1, 1)), ((1, 1), (1, 2))],
        );
        let mut dfs = Dfs::new();
        assert!(dfs.find_path(&mut grid, (0, 0), (1, 1)).unwrap());

        assert_eq!(grid.path_cells(), vec![(0, 0), (0, 1), (1, 1)]);
        assert!(grid.is_on_path(1, 2).unwrap());
        assert!(grid.is_on_path(2, 3).unwrap());
        assert!(!grid.is_on_path(2, 1).unwrap());
        assert!(!grid.is_on_path(3, 1).unwrap());
        assert_eq!(grid.path_len(), 5);
        assert_eq!(dfs.explored(), 4);
    }

    #[test]
    fn unreachable_finish_leaves_no_marks() {
        let mut grid = hand_carved(5, 7, &[((0, 0), (0, 1)), ((0, 1), (1, 1))]);
        let mut dfs = Dfs::new();
        assert!(!dfs.find_path(&mut grid, (0, 0), (1, 2)).unwrap());
        assert_eq!(dfs.explored(), 3);
        assert_eq!(grid.path_len(), 0);
    }

    #[test]
    fn failed_search_keeps_earlier_path() {
        let mut grid = hand_carved(5, 7, &[((0, 0), (0, 1)), ((0, 1), (1, 1))]);
        let mut dfs = Dfs::new();
        assert!(dfs.find_path(&mut grid, (0, 0), (1, 1)).unwrap());
        let solved = grid.to_string();

        assert!(!dfs.find_path(&mut grid, (1, 1), (0, 2)).unwrap());
        assert_eq!(grid.to_string(), solved);
    }

    #[test]
    fn does_not_walk_through_walls() {
        let mut grid = hand_carved(3, 5, &[]);
        assert!(!Dfs::new().find_path(&mut grid, (0, 0), (0, 1)).unwrap());

        grid.open_between((0, 0), (0, 1)).unwrap();
        assert!(Dfs::new().find_path(&mut grid, (0, 1), (0, 0)).unwrap());
        assert_eq!(grid.to_string(), "#####\n#...#\n#####\n");
    }

    #[test]
    fn rejects_cells_outside_the_maze() {
        let mut grid = hand_carved(5, 5, &[]);
        assert_eq!(
            Dfs::new().find_path(&mut grid, (0, 0), (2, 0)).unwrap_err(),
            MazeError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            }
        );
    }
}
