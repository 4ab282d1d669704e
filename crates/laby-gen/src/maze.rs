use std::fmt;

use laby_core::{Cell, Grid, Maze};

use crate::error::Result;
use crate::lattice::RoomLattice;

/// A generated maze: the frozen [`Grid`] plus what is known about the room
/// lattice it was carved in.
#[derive(Debug, Clone)]
pub struct GeneratedMaze {
    grid: Grid,
    room_rows: usize,
    room_cols: usize,
    braided: usize,
    open_passages: usize,
    open_interior: usize,
}

impl GeneratedMaze {
    pub(crate) fn from_lattice(lattice: RoomLattice, braided: usize) -> Result<Self> {
        let (room_rows, room_cols) = (lattice.room_rows(), lattice.room_cols());
        let open_passages = lattice.open_passages();
        let open_interior = lattice.open_interior();
        Ok(Self {
            grid: lattice.into_grid()?,
            room_rows,
            room_cols,
            braided,
            open_passages,
            open_interior,
        })
    }

    /// The passability matrix.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the maze, keeping its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
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

    /// Walls opened by braiding, on top of the spanning tree.
    pub fn braided(&self) -> usize {
        self.braided
    }

    /// Open walls between adjacent rooms. Equals `room_count() - 1` for an
    /// unbraided maze.
    pub fn open_passages(&self) -> usize {
        self.open_passages
    }

    /// Open interior cells that are not rooms.
    pub fn open_interior(&self) -> usize {
        self.open_interior
    }
}

impl Maze for GeneratedMaze {
    fn start(&self) -> Cell {
        self.grid.start()
    }

    fn out(&self) -> Cell {
        self.grid.out()
    }

    fn contains(&self, cell: Cell) -> bool {
        self.grid.contains(cell)
    }
}

impl fmt::Display for GeneratedMaze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

impl From<GeneratedMaze> for Grid {
    fn from(maze: GeneratedMaze) -> Self {
        maze.grid
    }
}
