//! **laby-gen**: random rectangular maze generation.
//!
//! [`MazeGen`] carves a perfect maze into a [`RoomLattice`] with the
//! Aldous–Broder random walk, then optionally braids it by knocking down a
//! fraction of the remaining interior walls. The output is a
//! [`GeneratedMaze`], which solvers consume through [`laby_core::Maze`].

pub mod config;
pub mod error;
pub mod lattice;
pub mod mapgen;
pub mod maze;

pub use config::MazeConfig;
pub use error::GenError;
pub use lattice::RoomLattice;
pub use mapgen::{MazeGen, WalkStats};
pub use maze::GeneratedMaze;
