//! Perfect maze carving and solving over a doubled "brick" wall grid.
//!
//! ```
//! use maze_carver::{generate, solve, WallGrid};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut grid = WallGrid::with_dims(11, 11)?;
//! generate(&mut grid, StdRng::seed_from_u64(1))?;
//! assert!(solve(&mut grid, None, None)?);
//! # Ok::<(), maze_carver::MazeError>(())
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod grids;
pub mod solvers;

pub use error::MazeError;
pub use generators::{generate, Backtracker, FallbackPolicy, Generator};
pub use grids::{cell_to_slot, Cell, WallGrid};
pub use solvers::{solve, Dfs, Pathfinder, SolverKind};
