use crate::geom::Cell;

/// What a solver may know about a maze.
///
/// Solvers explore a maze only through this contract: the two distinguished
/// cells and a containment query. `contains` doubles as bounds check and
/// obstacle check, so it must return `false` (never panic) for any cell
/// outside the maze.
pub trait Maze {
    /// Entry cell. Always passable.
    fn start(&self) -> Cell;

    /// Exit cell. Always passable.
    fn out(&self) -> Cell;

    /// Whether `cell` is inside the maze and traversable.
    fn contains(&self, cell: Cell) -> bool;
}

impl<M: Maze + ?Sized> Maze for &M {
    fn start(&self) -> Cell {
        (**self).start()
    }

    fn out(&self) -> Cell {
        (**self).out()
    }

    fn contains(&self, cell: Cell) -> bool {
        (**self).contains(cell)
    }
}
