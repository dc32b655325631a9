use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use maze_carver::config::MazeConfig;
use maze_carver::{solve, Backtracker, Generator, WallGrid};

fn emit(grid: &WallGrid, file: Option<&Path>) -> Result<()> {
    match file {
        Some(path) => fs::write(path, grid.to_string())
            .with_context(|| format!("failed to write maze to {}", path.display())),
        None => {
            print!("{}", grid);
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let env = env_logger::Env::new()
        .filter("MAZE_LOG")
        .write_style("MAZE_LOG_STYLE");
    env_logger::init_from_env(env);

    let config = MazeConfig::parse_from_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    log::debug!("maze options: {:?}", config);

    let mut grid = WallGrid::with_dims(config.rows, config.cols)
        .with_context(|| format!("cannot build a {}x{} maze", config.rows, config.cols))?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Backtracker::with_fallback(&grid, rng, config.fallback).generate_maze(&mut grid)?;
    emit(&grid, config.maze_file())?;

    if config.solve {
        if !solve(&mut grid, None, None)? {
            log::warn!("maze has no path from the first to the last cell");
        }
        if config.maze_file().is_none() {
            println!();
        }
        emit(&grid, config.solved_file().as_deref())?;
    }

    Ok(())
}
