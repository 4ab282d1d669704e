//! **laby-paths**: best-first maze solving.
//!
//! One best-first search, parameterised by a [`Heuristic`], covers both
//! algorithms:
//!
//! - **Dijkstra** with the zero heuristic ([`dijkstra`], [`PathSearch::dijkstra`])
//! - **A\*** with any admissible distance ([`astar`], [`PathSearch::new`])
//!
//! [`PathSearch::find_path`] runs to completion. [`AstarStepper`] runs the
//! same search one expansion at a time and exposes its frontier, closed set
//! and partial trail, so a driver can observe or animate it.
//!
//! | Heuristic | Admissible with |
//! |---|---|
//! | [`Distance::Zero`] | any movement |
//! | [`Distance::Manhattan`] | [`Movement::Orthogonal`] |
//! | [`Distance::Euclidean`], [`Distance::Chebyshev`], [`Distance::Octile`] | any movement |

mod distance;
mod error;
mod frontier;
mod moves;
mod path;
mod search;
mod stepper;
mod traits;

pub use distance::{Distance, ParseDistanceError, chebyshev, euclidean, manhattan, octile, zero};
pub use error::SearchError;
pub use frontier::{Frontier, FrontierEntry};
pub use moves::{
    DIAGONAL_COST, Movement, Neighbors, ORTHOGONAL_COST, ParseMovementError, step_cost,
};
pub use path::Path;
pub use search::{PathSearch, SearchConfig, astar, dijkstra};
pub use stepper::{AstarStepper, Phase, Step};
pub use traits::Heuristic;
