//! Error types for path searches.

use laby_core::Cell;
use thiserror::Error;

/// Path search error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier ran dry before the exit was reached.
    #[error("maze has no path from start to exit ({expansions} cells expanded)")]
    Unsolvable { expansions: usize },

    /// The maze's start or exit is not a cell the maze contains.
    #[error("{role} cell {cell} is not passable")]
    BlockedEndpoint { role: &'static str, cell: Cell },
}
