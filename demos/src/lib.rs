//! Shared setup for the maze demos.
//!
//! Both binaries take the same maze source: either a text grid (`--input`)
//! or a generated maze described by a TOML file (`--config`) and the
//! command-line overrides layered on top of it.

use std::path::{Path, PathBuf};

use clap::Args;
use laby_core::{Grid, GridError};
use laby_gen::{GenError, MazeConfig, MazeGen};
use laby_paths::{Distance, Movement, SearchConfig, SearchError};
use serde::Deserialize;
use thiserror::Error;

/// Settings file layout:
///
/// ```toml
/// [maze]
/// room_rows = 20
/// room_cols = 40
/// destruction_ratio = 0.1
/// seed = 7
///
/// [search]
/// # optional: defaults to manhattan, or octile with diagonal movement
/// heuristic = "manhattan"
/// movement = "orthogonal"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub maze: MazeConfig,
    pub search: SearchConfig,
}

impl DemoConfig {
    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, DemoError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = read(path)?;
        Self::from_toml(&text)
    }
}

/// Errors raised while preparing a demo run.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings file: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
    #[error(transparent)]
    Gen(#[from] GenError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Maze source and search options shared by the demo binaries.
#[derive(Args, Debug, Clone, Default)]
pub struct MazeArgs {
    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Solve this text grid instead of generating one
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Rooms per column of the generated maze
    #[arg(long)]
    pub room_rows: Option<usize>,

    /// Rooms per row of the generated maze
    #[arg(long)]
    pub room_cols: Option<usize>,

    /// Fraction of interior walls knocked down after carving (0 to 1)
    #[arg(long)]
    pub ratio: Option<f64>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// zero (dijkstra), manhattan, euclidean, chebyshev or octile
    #[arg(long)]
    pub heuristic: Option<Distance>,

    /// Allow diagonal moves
    #[arg(long)]
    pub diagonal: bool,
}

impl MazeArgs {
    /// The settings file, if any, with the flags applied over it.
    pub fn settings(&self) -> Result<DemoConfig, DemoError> {
        let mut cfg = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };
        if let Some(rows) = self.room_rows {
            cfg.maze.room_rows = rows;
        }
        if let Some(cols) = self.room_cols {
            cfg.maze.room_cols = cols;
        }
        if let Some(ratio) = self.ratio {
            cfg.maze.destruction_ratio = ratio;
        }
        if self.seed.is_some() {
            cfg.maze.seed = self.seed;
        }
        if self.heuristic.is_some() {
            cfg.search.heuristic = self.heuristic;
        }
        if self.diagonal {
            cfg.search.movement = Movement::Diagonal;
        }
        Ok(cfg)
    }

    /// Load `--input`, or generate a maze from `cfg`.
    pub fn grid(&self, cfg: &DemoConfig) -> Result<Grid, DemoError> {
        match &self.input {
            Some(path) => Ok(Grid::parse(&read(path)?)?),
            None => Ok(generate(&cfg.maze)?),
        }
    }
}

/// Generate a maze from `cfg` and return its grid.
pub fn generate(cfg: &MazeConfig) -> Result<Grid, GenError> {
    let maze = MazeGen::from_config(cfg).generate_with(cfg)?;
    log::info!(
        "generated {}x{} rooms, {} walls braided",
        maze.room_rows(),
        maze.room_cols(),
        maze.braided()
    );
    Ok(maze.into_grid())
}

fn read(path: &Path) -> Result<String, DemoError> {
    std::fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.to_path_buf(),
        source,
    })
}
