use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::generators::Generator;
use crate::grids::{Cell, Dimensions, WallGrid};

/// Where the carver jumps when the stack runs dry with cells left over.
///
/// On a rectangular grid the stack only empties after every cell has been
/// reached, so neither branch fires during a normal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// sample any cell, visited or not, and count it as newly visited
    AnyCell,
    /// sample only among cells not visited yet
    UnvisitedOnly,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        FallbackPolicy::UnvisitedOnly
    }
}

/// Randomized depth first carver with an explicit stack.
pub struct Backtracker<R: Rng> {
    rng: R,
    cells: Dimensions,
    visited: Vec<bool>,
    stack: Vec<Cell>,
    current: Cell,
    remaining: usize,
    fallback: FallbackPolicy,
    steps: usize,
    pub done: bool,
}

impl<R: Rng> Backtracker<R> {
    pub fn new(grid: &WallGrid, rng: R) -> Self {
        Self::with_fallback(grid, rng, FallbackPolicy::default())
    }

    pub fn with_fallback(grid: &WallGrid, rng: R, fallback: FallbackPolicy) -> Self {
        let cells = grid.cells;
        let current = grid.last_cell();
        let mut visited = vec![false; cells.area()];
        visited[cells.columns * current.0 + current.1] = true;

        Self {
            rng,
            cells,
            visited,
            stack: Vec::new(),
            current,
            remaining: cells.area() - 1,
            fallback,
            steps: 0,
            done: false,
        }
    }

    #[inline]
    fn index_of(&self, cell: Cell) -> usize {
        self.cells.columns * cell.0 + cell.1
    }

    fn visit(&mut self, cell: Cell) {
        let index = self.index_of(cell);
        self.visited[index] = true;
        self.remaining = self.remaining.saturating_sub(1);
        self.current = cell;
    }

    pub fn current(&self) -> Cell {
        self.current
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    fn jump(&mut self) {
        let target = match self.fallback {
            FallbackPolicy::AnyCell => Some((
                self.rng.gen_range(0..self.cells.rows),
                self.rng.gen_range(0..self.cells.columns),
            )),
            FallbackPolicy::UnvisitedOnly => {
                let columns = self.cells.columns;
                let unvisited: Vec<Cell> = self
                    .visited
                    .iter()
                    .enumerate()
                    .filter(|(_, seen)| !**seen)
                    .map(|(index, _)| (index / columns, index % columns))
                    .collect();
                unvisited.choose(&mut self.rng).copied()
            }
        };

        match target {
            Some(cell) => {
                log::warn!(
                    "carver stack ran dry with {} cells left, jumping to {:?}",
                    self.remaining,
                    cell
                );
                self.visit(cell);
            }
            // counter and visited set disagree, nothing left to carve
            None => self.remaining = 0,
        }
    }
}

impl<R: Rng> Generator for Backtracker<R> {
    fn step_generation(&mut self, grid: &mut WallGrid) -> Result<()> {
        if self.done {
            return Ok(());
        }
        self.steps += 1;

        grid.open_cell(self.current)?;
        if self.remaining == 0 {
            self.done = true;
            log::debug!(
                "carved {}x{} maze in {} steps",
                self.cells.rows,
                self.cells.columns,
                self.steps
            );
            return Ok(());
        }

        let unvisited: Vec<Cell> = grid
            .neighbors_of(self.current.0, self.current.1)
            .map(|(cell, _)| cell)
            .filter(|cell| !self.visited[self.index_of(*cell)])
            .collect();

        if let Some(&chosen) = unvisited.choose(&mut self.rng) {
            log::trace!("carve {:?} -> {:?}", self.current, chosen);
            self.stack.push(self.current);
            grid.open_between(self.current, chosen)?;
            self.visit(chosen);
        } else if let Some(cell) = self.stack.pop() {
            self.current = cell;
        } else {
            self.jump();
        }

        Ok(())
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
