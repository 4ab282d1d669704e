use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use laby_core::{Cell, Direction, Maze};

use crate::distance::Distance;

/// Cost of a horizontal or vertical step.
pub const ORTHOGONAL_COST: f64 = 1.0;
/// Cost of a diagonal step.
pub const DIAGONAL_COST: f64 = SQRT_2;

/// Which moves the search may take from a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Movement {
    /// Four directions, unit cost.
    #[default]
    Orthogonal,
    /// Eight directions; diagonals cost [`DIAGONAL_COST`] and may not cut
    /// between two walls touching at a corner.
    Diagonal,
}

impl Movement {
    /// Directions in expansion order.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Movement::Orthogonal => &Direction::CARDINAL,
            Movement::Diagonal => &Direction::ALL,
        }
    }

    /// The most informed built-in heuristic that stays admissible for this
    /// movement model.
    pub fn default_heuristic(self) -> Distance {
        match self {
            Movement::Orthogonal => Distance::Manhattan,
            Movement::Diagonal => Distance::Octile,
        }
    }
}

/// Cost of one step in `dir`.
#[inline]
pub fn step_cost(dir: Direction) -> f64 {
    if dir.is_diagonal() {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Movement::Orthogonal => "orthogonal",
            Movement::Diagonal => "diagonal",
        })
    }
}

/// Unknown movement name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown movement {0:?} (expected orthogonal or diagonal)")]
pub struct ParseMovementError(pub String);

impl FromStr for Movement {
    type Err = ParseMovementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "orthogonal" | "4" => Ok(Movement::Orthogonal),
            "diagonal" | "8" => Ok(Movement::Diagonal),
            _ => Err(ParseMovementError(s.to_string())),
        }
    }
}

/// Reusable neighbour buffer.
///
/// Enumerates the cells reachable in one step from a cell, with the cost of
/// each step, keeping only cells the maze contains.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<(Cell, f64)>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Empty buffer with room for eight steps.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Steps from `cell` under `movement`.
    ///
    /// A diagonal step is kept only if both orthogonal cells it passes
    /// between are passable.
    pub fn of<M: Maze + ?Sized>(
        &mut self,
        maze: &M,
        cell: Cell,
        movement: Movement,
    ) -> &[(Cell, f64)] {
        self.buf.clear();
        for &dir in movement.directions() {
            let next = cell.step(dir);
            if !maze.contains(next) {
                continue;
            }
            if let Some((a, b)) = dir.components() {
                if !maze.contains(cell.step(a)) || !maze.contains(cell.step(b)) {
                    continue;
                }
            }
            self.buf.push((next, step_cost(dir)));
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laby_core::Grid;

    #[test]
    fn orthogonal_in_open_room() {
        let g = Grid::parse("   \n I \n  O").unwrap();
        let mut n = Neighbors::new();
        let got = n.of(&g, Cell::new(1, 1), Movement::Orthogonal);
        assert_eq!(
            got,
            &[
                (Cell::new(1, 2), 1.0),
                (Cell::new(2, 1), 1.0),
                (Cell::new(1, 0), 1.0),
                (Cell::new(0, 1), 1.0),
            ]
        );
    }

    #[test]
    fn diagonal_in_open_room() {
        let g = Grid::parse("   \n I \n  O").unwrap();
        let mut n = Neighbors::new();
        let got = n.of(&g, Cell::new(1, 1), Movement::Diagonal).to_vec();
        assert_eq!(got.len(), 8);
        assert_eq!(got.iter().filter(|(_, c)| *c == DIAGONAL_COST).count(), 4);
    }

    #[test]
    fn no_corner_cutting() {
        // Going from I to O diagonally would squeeze between two walls.
        let g = Grid::parse("I#\n#O").unwrap();
        let mut n = Neighbors::new();
        assert!(n.of(&g, g.start(), Movement::Diagonal).is_empty());

        // One wall is enough to block the diagonal.
        let g = Grid::parse("I \n#O").unwrap();
        let got = n.of(&g, g.start(), Movement::Diagonal).to_vec();
        assert_eq!(got, vec![(Cell::new(0, 1), ORTHOGONAL_COST)]);
    }

    #[test]
    fn border_cells_have_no_outside_neighbours() {
        let g = Grid::parse("IO").unwrap();
        let mut n = Neighbors::new();
        let got = n.of(&g, Cell::new(0, 0), Movement::Diagonal).to_vec();
        assert_eq!(got, vec![(Cell::new(0, 1), ORTHOGONAL_COST)]);
    }

    #[test]
    fn parse_display_and_defaults() {
        assert_eq!("Diagonal".parse::<Movement>(), Ok(Movement::Diagonal));
        assert_eq!("4".parse::<Movement>(), Ok(Movement::Orthogonal));
        assert!("hex".parse::<Movement>().is_err());
        assert_eq!(Movement::Diagonal.to_string(), "diagonal");
        assert_eq!(Movement::Orthogonal.default_heuristic(), Distance::Manhattan);
        assert_eq!(Movement::Diagonal.default_heuristic(), Distance::Octile);
    }
}
