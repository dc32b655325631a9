pub mod dfs;

use crate::error::Result;
use crate::grids::{Cell, WallGrid};

pub use dfs::Dfs;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SolverKind {
    Dfs,
}

pub trait Pathfinder {
    /// Marks the path from `start` to `finish` on the grid. `Ok(false)` when
    /// the two cells are not connected.
    fn find_path(&mut self, grid: &mut WallGrid, start: Cell, finish: Cell) -> Result<bool>;
}

pub fn new_solver(kind: SolverKind) -> Box<dyn Pathfinder> {
    match kind {
        SolverKind::Dfs => Box::new(Dfs::new()),
    }
}

/// Solves from `start` (default `(0, 0)`) to `finish` (default the last
/// cell) with depth first search.
pub fn solve(grid: &mut WallGrid, start: Option<Cell>, finish: Option<Cell>) -> Result<bool> {
    let start = start.unwrap_or((0, 0));
    let finish = finish.unwrap_or_else(|| grid.last_cell());
    new_solver(SolverKind::Dfs).find_path(grid, start, finish)
}
