use laby_core::Cell;

/// A solved route: cells from start to exit inclusive, and its total cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Cell>,
    cost: f64,
}

impl Path {
    /// Create a path from its cells and total cost.
    pub fn new(cells: Vec<Cell>, cost: f64) -> Self {
        Self { cells, cost }
    }

    /// Cells from start to exit.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Consume the path, keeping its cells.
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Number of cells, both endpoints included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves (`len() - 1`).
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Sum of the step costs.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The start cell.
    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// The exit cell.
    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Whether the path passes through `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Iterate over the cells in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let path = Path::new(vec![Cell::new(1, 1), Cell::new(1, 2)], 1.0);
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
