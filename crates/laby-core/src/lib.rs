//! **laby-core**: shared maze types.
//!
//! Generators produce, and solvers consume, values of the types defined
//! here: [`Cell`] coordinates, the [`Maze`] capability trait, and the
//! [`Grid`] passability matrix (which also handles text import).

pub mod geom;
pub mod grid;
pub mod maze;

pub use geom::{Cell, Direction};
pub use grid::{Grid, GridError};
pub use maze::Maze;
