//! The room lattice a maze is carved in.
//!
//! Room `(r, c)` lives at matrix cell `(2r + 1, 2c + 1)`. Cells with one odd
//! and one even coordinate are the walls between two adjacent rooms; cells
//! with two even coordinates are pillars. Example with 2x2 rooms, all walls
//! closed:
//!
//! ```text
//! #####
//! # # #
//! #####
//! # # #
//! #####
//! ```

use laby_core::{Cell, Direction, Grid, GridError};

use crate::error::{GenError, Result};

/// A passability matrix over a `room_rows x room_cols` lattice of rooms.
///
/// Rooms are always open. Walls only ever go from closed to open, and the
/// outer border is never opened.
#[derive(Debug, Clone)]
pub struct RoomLattice {
    room_rows: usize,
    room_cols: usize,
    rows: usize,
    cols: usize,
    passable: Vec<bool>,
}

impl RoomLattice {
    /// Create a lattice with every room open and every wall closed.
    pub fn new(room_rows: usize, room_cols: usize) -> Result<Self> {
        if room_rows == 0 || room_cols == 0 {
            return Err(GenError::NoRooms {
                room_rows,
                room_cols,
            });
        }
        let rows = 2 * room_rows + 1;
        let cols = 2 * room_cols + 1;
        let passable = (0..rows * cols)
            .map(|i| (i / cols) % 2 == 1 && (i % cols) % 2 == 1)
            .collect();
        Ok(Self {
            room_rows,
            room_cols,
            rows,
            cols,
            passable,
        })
    }

    /// Rows of rooms.
    pub fn room_rows(&self) -> usize {
        self.room_rows
    }

    /// Columns of rooms.
    pub fn room_cols(&self) -> usize {
        self.room_cols
    }

    /// Total number of rooms.
    pub fn room_count(&self) -> usize {
        self.room_rows * self.room_cols
    }

    /// Matrix rows (`2 * room_rows + 1`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Matrix columns (`2 * room_cols + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the room coordinate lies inside the lattice.
    #[inline]
    pub fn contains_room(&self, room: Cell) -> bool {
        room.row >= 0
            && room.col >= 0
            && (room.row as usize) < self.room_rows
            && (room.col as usize) < self.room_cols
    }

    /// Matrix cell of a room.
    #[inline]
    pub fn room_cell(room: Cell) -> Cell {
        Cell::new(2 * room.row + 1, 2 * room.col + 1)
    }

    /// Entry: the room at the lattice origin.
    pub fn start(&self) -> Cell {
        Self::room_cell(Cell::ZERO)
    }

    /// Exit: the room at the opposite corner.
    pub fn out(&self) -> Cell {
        Cell::new(self.rows as i32 - 2, self.cols as i32 - 2)
    }

    /// Whether a matrix cell is open. Out-of-range cells are closed.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.passable[i])
    }

    /// Open the wall next to `room` in the cardinal direction `dir`.
    pub fn carve(&mut self, room: Cell, dir: Direction) {
        debug_assert!(!dir.is_diagonal(), "rooms are carved orthogonally");
        debug_assert!(self.contains_room(room.step(dir)));
        self.open(Self::room_cell(room).step(dir));
    }

    pub(crate) fn open(&mut self, cell: Cell) {
        if let Some(i) = self.index(cell) {
            self.passable[i] = true;
        }
    }

    /// Number of open walls between adjacent rooms.
    pub fn open_passages(&self) -> usize {
        interior_walls(self.rows, self.cols)
            .filter(|&c| is_passage(c) && self.is_open(c))
            .count()
    }

    /// Number of open interior cells that are not rooms (passages and
    /// pillars knocked down by braiding).
    pub fn open_interior(&self) -> usize {
        interior_walls(self.rows, self.cols)
            .filter(|&c| self.is_open(c))
            .count()
    }

    /// Every closed cell strictly inside the outer border, row-major.
    pub fn closed_interior(&self) -> Vec<Cell> {
        interior_walls(self.rows, self.cols)
            .filter(|&c| !self.is_open(c))
            .collect()
    }

    /// Freeze the lattice into a [`Grid`] with the corner entry and exit.
    pub fn into_grid(self) -> std::result::Result<Grid, GridError> {
        let (start, out) = (self.start(), self.out());
        Grid::new(self.rows, self.cols, self.passable, start, out)
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.row < 0 || cell.col < 0 {
            return None;
        }
        let (r, c) = (cell.row as usize, cell.col as usize);
        (r < self.rows && c < self.cols).then(|| r * self.cols + c)
    }
}

/// Interior cells of a `rows x cols` matrix that are not rooms, row-major.
fn interior_walls(rows: usize, cols: usize) -> impl Iterator<Item = Cell> {
    (1..rows.saturating_sub(1))
        .flat_map(move |r| (1..cols.saturating_sub(1)).map(move |c| Cell::new(r as i32, c as i32)))
        .filter(|c| c.row % 2 == 0 || c.col % 2 == 0)
}

/// A wall between two rooms (as opposed to a pillar).
#[inline]
fn is_passage(cell: Cell) -> bool {
    (cell.row + cell.col) % 2 == 1
}
