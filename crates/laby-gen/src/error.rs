//! Error types for maze generation.

use laby_core::GridError;
use thiserror::Error;

/// Maze generation error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenError {
    /// The room lattice must have at least one row and one column.
    #[error("room lattice must be non-empty, got {room_rows}x{room_cols}")]
    NoRooms { room_rows: usize, room_cols: usize },

    /// The destruction ratio must lie in `[0, 1]`.
    #[error("destruction ratio {0} is outside [0, 1]")]
    RatioOutOfRange(f64),

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
}

pub type Result<T> = std::result::Result<T, GenError>;
