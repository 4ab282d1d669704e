//! A rectangular passability matrix with an entry and an exit.
//!
//! A [`Grid`] is built once, either by a generator or by [`Grid::parse`]
//! from a text block, and is immutable afterwards. Path annotation for
//! reports goes through [`Grid::render_path`], which produces text and leaves
//! the grid untouched.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::geom::Cell;
use crate::maze::Maze;

/// Text symbol for a wall.
pub const WALL: char = '#';
/// Text symbol for the entry cell.
pub const START: char = 'I';
/// Text symbol for the exit cell.
pub const EXIT: char = 'O';
/// Symbol used by [`Grid::render_path`] for cells on a path.
pub const PATH: char = '*';

/// Errors raised while building a [`Grid`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows or no columns.
    #[error("grid is empty")]
    Empty,
    /// A text line does not have the same width as the first one.
    #[error("grid is not rectangular: line {line} has {found} columns, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The passability buffer does not hold `rows * cols` entries.
    #[error("grid buffer holds {found} cells, expected {expected}")]
    SizeMismatch { expected: usize, found: usize },
    #[error("grid has no start marker 'I'")]
    MissingStart,
    #[error("grid has no exit marker 'O'")]
    MissingExit,
    #[error("marker '{marker}' appears twice, at {first} and {second}")]
    DuplicateMarker {
        marker: char,
        first: Cell,
        second: Cell,
    },
    /// Start or exit is out of bounds or on a wall.
    #[error("{role} cell {cell} is not a passable cell of the grid")]
    Endpoint { role: &'static str, cell: Cell },
}

/// A rectangular boolean passability matrix plus two distinguished cells.
///
/// `true` means traversable, `false` means wall. `start` and `out` are
/// always in bounds and passable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    passable: Vec<bool>,
    start: Cell,
    out: Cell,
}

impl Grid {
    /// Create a grid from a row-major passability buffer.
    pub fn new(
        rows: usize,
        cols: usize,
        passable: Vec<bool>,
        start: Cell,
        out: Cell,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if passable.len() != rows * cols {
            return Err(GridError::SizeMismatch {
                expected: rows * cols,
                found: passable.len(),
            });
        }
        let grid = Self {
            rows,
            cols,
            passable,
            start,
            out,
        };
        if !grid.contains(start) {
            return Err(GridError::Endpoint {
                role: "start",
                cell: start,
            });
        }
        if !grid.contains(out) {
            return Err(GridError::Endpoint {
                role: "exit",
                cell: out,
            });
        }
        Ok(grid)
    }

    /// Create a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>, start: Cell, out: Cell) -> Result<Self, GridError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut passable = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(GridError::Ragged {
                    line: i + 1,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            passable.extend(row);
        }
        Self::new(n_rows, n_cols, passable, start, out)
    }

    /// Parse a text block.
    ///
    /// `#` is a wall, `I` the entry, `O` the exit, and any other character
    /// is passable. Blank lines before and after the block are ignored but
    /// spaces are never trimmed, since they are passable cells. Every line
    /// must have the same width and each marker must appear exactly once.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let body = text.trim_matches(|c| c == '\n' || c == '\r');
        if body.is_empty() {
            return Err(GridError::Empty);
        }

        let mut passable = Vec::with_capacity(body.len());
        let mut start: Option<Cell> = None;
        let mut out: Option<Cell> = None;
        let mut width: Option<usize> = None;
        let mut rows = 0;

        for (r, line) in body.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut found = 0;
            for (c, ch) in line.chars().enumerate() {
                let cell = Cell::new(r as i32, c as i32);
                match ch {
                    START => set_marker(&mut start, START, cell)?,
                    EXIT => set_marker(&mut out, EXIT, cell)?,
                    _ => {}
                }
                passable.push(ch != WALL);
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        line: r + 1,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = width.unwrap_or(0);
        let start = start.ok_or(GridError::MissingStart)?;
        let out = out.ok_or(GridError::MissingExit)?;
        log::debug!("parsed grid with {rows} rows and {cols} cols");
        Self::new(rows, cols, passable, start, out)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn out(&self) -> Cell {
        self.out
    }

    /// Whether `cell` is within bounds and passable. Never panics.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.passable[i])
    }

    /// Number of passable cells.
    pub fn passable_count(&self) -> usize {
        self.passable.iter().filter(|&&p| p).count()
    }

    /// Iterate over `(Cell, passable)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, bool)> + '_ {
        let cols = self.cols;
        self.passable
            .iter()
            .enumerate()
            .map(move |(i, &p)| (Cell::new((i / cols) as i32, (i % cols) as i32), p))
    }

    /// Render as text: `#` for walls, a space for passable cells.
    pub fn to_text(&self) -> String {
        self.render_with(|_, passable| if passable { ' ' } else { WALL })
    }

    /// Render as text with every cell of `path` drawn as `*`.
    pub fn render_path(&self, path: &[Cell]) -> String {
        let on_path: HashSet<Cell> = path.iter().copied().collect();
        self.render_with(|cell, passable| {
            if on_path.contains(&cell) {
                PATH
            } else if passable {
                ' '
            } else {
                WALL
            }
        })
    }

    fn render_with(&self, f: impl Fn(Cell, bool) -> char) -> String {
        let mut s = String::with_capacity((self.cols + 1) * self.rows);
        for (cell, passable) in self.iter() {
            if cell.col == 0 && cell.row > 0 {
                s.push('\n');
            }
            s.push(f(cell, passable));
        }
        s
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.row < 0 || cell.col < 0 {
            return None;
        }
        let (r, c) = (cell.row as usize, cell.col as usize);
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(r * self.cols + c)
    }
}

fn set_marker(slot: &mut Option<Cell>, marker: char, cell: Cell) -> Result<(), GridError> {
    match *slot {
        Some(first) => Err(GridError::DuplicateMarker {
            marker,
            first,
            second: cell,
        }),
        None => {
            *slot = Some(cell);
            Ok(())
        }
    }
}

impl Maze for Grid {
    fn start(&self) -> Cell {
        self.start
    }

    fn out(&self) -> Cell {
        self.out
    }

    fn contains(&self, cell: Cell) -> bool {
        Grid::contains(self, cell)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
