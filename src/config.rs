//! Command line configuration.
//! `--rows N --cols M [--seed S] [--solve] [--output FILE [SOLVED_FILE]]`

use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::generators::FallbackPolicy;

pub const DEFAULT_DIMS: (usize, usize) = (11, 11);

#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    pub seed: Option<u64>,
    pub solve: bool,
    /// maze file, then optionally the solved maze file
    pub output: Vec<PathBuf>,
    pub fallback: FallbackPolicy,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            rows: DEFAULT_DIMS.0,
            cols: DEFAULT_DIMS.1,
            seed: None,
            solve: false,
            output: Vec::new(),
            fallback: FallbackPolicy::default(),
        }
    }
}

fn make_options_parser() -> Command {
    Command::new("maze-carver")
        .about("Carves a random perfect maze and optionally solves it")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("rows")
                .long("rows")
                .value_name("N")
                .help("number of rows of the maze")
                .value_parser(value_parser!(usize))
                .default_value("11"),
        )
        .arg(
            Arg::new("cols")
                .long("cols")
                .value_name("M")
                .help("number of columns of the maze")
                .value_parser(value_parser!(usize))
                .default_value("11"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for a reproducible maze")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("solve")
                .long("solve")
                .action(ArgAction::SetTrue)
                .help("also print the solution of the maze"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("FILE")
                .num_args(1..=2)
                .value_parser(value_parser!(PathBuf))
                .help("write the maze to a file, and the solved maze to a second one"),
        )
        .arg(
            Arg::new("fallback")
                .long("fallback")
                .help("where the carver jumps when its stack runs dry")
                .value_parser(["any", "unvisited"])
                .default_value("unvisited"),
        )
}

impl MazeConfig {
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut parser = make_options_parser();
        let matches = parser.try_get_matches_from_mut(args)?;
        let config = Self::from_matches(&matches);

        // a lone output like `..` leaves nowhere to put the solved maze
        if config.solve && config.output.len() == 1 && config.solved_file().is_none() {
            return Err(parser.error(
                ErrorKind::InvalidValue,
                "--output needs a file name to derive the solved maze file from, \
                 or pass a second file",
            ));
        }
        Ok(config)
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let defaults = MazeConfig::default();
        let fallback = match matches.get_one::<String>("fallback").map(String::as_str) {
            Some("any") => FallbackPolicy::AnyCell,
            _ => FallbackPolicy::UnvisitedOnly,
        };

        MazeConfig {
            rows: matches.get_one::<usize>("rows").copied().unwrap_or(defaults.rows),
            cols: matches.get_one::<usize>("cols").copied().unwrap_or(defaults.cols),
            seed: matches.get_one::<u64>("seed").copied(),
            solve: matches.get_flag("solve"),
            output: matches
                .get_many::<PathBuf>("output")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
            fallback,
        }
    }

    /// File the unsolved maze goes to.
    pub fn maze_file(&self) -> Option<&Path> {
        self.output.first().map(PathBuf::as_path)
    }

    /// File the solved maze goes to: the second output if given, else
    /// `<stem>_solved.<ext>` next to the first.
    pub fn solved_file(&self) -> Option<PathBuf> {
        if let Some(second) = self.output.get(1) {
            return Some(second.clone());
        }

        let first = self.output.first()?;
        let stem = first.file_stem()?.to_string_lossy().into_owned();
        let name = match first.extension() {
            Some(ext) => format!("{}_solved.{}", stem, ext.to_string_lossy()),
            None => format!("{}_solved", stem),
        };
        Some(first.with_file_name(name))
    }
}
