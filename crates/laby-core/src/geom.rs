//! Geometry primitives: [`Cell`] coordinates and movement [`Direction`]s.
//!
//! Coordinates are matrix-style: `row` grows downwards, `col` grows to the
//! right. Both are signed so that neighbours of border cells can be formed
//! and then rejected by a containment query.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A `(row, col)` coordinate pair. Cells have no identity beyond their
/// coordinates: they compare and hash by value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The neighbour one step away in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        self + dir.delta()
    }

    /// The four cardinal neighbours (right, down, left, up).
    #[inline]
    pub fn neighbors_4(self) -> [Cell; 4] {
        Direction::CARDINAL.map(|d| self.step(d))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the eight grid-aligned movement directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
    DownRight,
    DownLeft,
    UpLeft,
    UpRight,
}

impl Direction {
    /// The four orthogonal directions, in expansion order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// The four diagonal directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpLeft,
        Direction::UpRight,
    ];

    /// All eight directions, cardinal ones first.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpLeft,
        Direction::UpRight,
    ];

    /// Offset of a single step in this direction.
    #[inline]
    pub const fn delta(self) -> Cell {
        match self {
            Direction::Right => Cell::new(0, 1),
            Direction::Down => Cell::new(1, 0),
            Direction::Left => Cell::new(0, -1),
            Direction::Up => Cell::new(-1, 0),
            Direction::DownRight => Cell::new(1, 1),
            Direction::DownLeft => Cell::new(1, -1),
            Direction::UpLeft => Cell::new(-1, -1),
            Direction::UpRight => Cell::new(-1, 1),
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        !matches!(
            self,
            Direction::Right | Direction::Down | Direction::Left | Direction::Up
        )
    }

    /// The two cardinal directions a diagonal step is made of, or `None`
    /// for a cardinal direction.
    pub const fn components(self) -> Option<(Direction, Direction)> {
        match self {
            Direction::DownRight => Some((Direction::Down, Direction::Right)),
            Direction::DownLeft => Some((Direction::Down, Direction::Left)),
            Direction::UpLeft => Some((Direction::Up, Direction::Left)),
            Direction::UpRight => Some((Direction::Up, Direction::Right)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_arithmetic() {
        let a = Cell::new(2, 3);
        let b = Cell::new(1, -1);
        assert_eq!(a + b, Cell::new(3, 2));
        assert_eq!(a - b, Cell::new(1, 4));
        assert_eq!(a.shift(-2, -3), Cell::ZERO);
        assert_eq!(Cell::from((4, 5)), Cell::new(4, 5));
    }

    #[test]
    fn cell_order_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }

    #[test]
    fn neighbors_4_of_origin_leave_the_quadrant() {
        let n = Cell::ZERO.neighbors_4();
        assert_eq!(
            n,
            [
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(0, -1),
                Cell::new(-1, 0)
            ]
        );
    }

    #[test]
    fn diagonal_components_add_up() {
        for d in Direction::DIAGONAL {
            assert!(d.is_diagonal());
            let (a, b) = d.components().unwrap();
            assert!(!a.is_diagonal() && !b.is_diagonal());
            assert_eq!(a.delta() + b.delta(), d.delta());
        }
        for d in Direction::CARDINAL {
            assert!(d.components().is_none());
        }
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, -1).to_string(), "(3, -1)");
    }
}
