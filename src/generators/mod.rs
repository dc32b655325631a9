pub mod backtracker;

use rand::Rng;

use crate::error::Result;
use crate::grids::WallGrid;

pub use backtracker::{Backtracker, FallbackPolicy};

pub trait Generator {
    /// Advances carving by one move. Does nothing once done.
    fn step_generation(&mut self, grid: &mut WallGrid) -> Result<()>;
    fn is_done(&self) -> bool;

    fn generate_maze(&mut self, grid: &mut WallGrid) -> Result<()> {
        while !self.is_done() {
            self.step_generation(grid)?;
        }
        Ok(())
    }
}

/// Carves `grid` into a perfect maze with the default fallback policy.
pub fn generate<R: Rng>(grid: &mut WallGrid, rng: R) -> Result<()> {
    Backtracker::new(grid, rng).generate_maze(grid)
}
