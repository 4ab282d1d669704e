use laby_core::Cell;

/// Estimate of the remaining cost from `from` to `goal`.
///
/// Must be `>= 0`, and must never overestimate the true remaining cost
/// (admissible) for the search to return optimal paths. This is not checked:
/// an inadmissible heuristic still terminates but may yield a longer path.
pub trait Heuristic {
    fn estimate(&self, from: Cell, goal: Cell) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Cell, Cell) -> f64,
{
    #[inline]
    fn estimate(&self, from: Cell, goal: Cell) -> f64 {
        self(from, goal)
    }
}
