//! The open set of the search: cells reached but not yet expanded.
//!
//! Each entry records the route cost `g` it was pushed with and its key
//! `g + h`. The cheapest key is expanded next, and among equal keys the
//! earliest push wins. Finding a cheaper route to a queued cell pushes a
//! fresh entry; the stale one stays queued until the search pops and drops it.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use laby_core::Cell;

/// A frontier entry.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub cell: Cell,
    /// Cost from the start when the entry was pushed.
    pub g: f64,
    /// `g` plus the heuristic estimate to the goal.
    pub priority: f64,
    /// Monotonically increasing push counter.
    pub seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// The search frontier.
///
/// A cell may be present several times: a cheaper route pushes a new entry
/// without removing the old one, and the search discards superseded entries
/// when they surface.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a cell and return the sequence number it was given.
    pub fn push(&mut self, cell: Cell, g: f64, priority: f64) -> u64 {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(FrontierEntry {
            cell,
            g,
            priority,
            seq,
        }));
        seq
    }

    /// Pop the entry with the lowest priority (ties broken FIFO).
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// The entry [`pop`](Self::pop) would return.
    pub fn peek(&self) -> Option<&FrontierEntry> {
        self.heap.peek().map(|Reverse(entry)| entry)
    }

    /// Whether no entries are left.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, superseded ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of pushes so far.
    pub fn pushed(&self) -> u64 {
        self.seq
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &FrontierEntry> {
        self.heap.iter().map(|Reverse(entry)| entry)
    }

    /// Entries in pop order.
    pub fn sorted(&self) -> Vec<FrontierEntry> {
        let mut entries: Vec<_> = self.iter().copied().collect();
        entries.sort();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(col: i32) -> Cell {
        Cell::new(0, col)
    }

    #[test]
    fn lowest_priority_first() {
        let mut f = Frontier::new();
        f.push(c(0), 0.0, 3.0);
        f.push(c(1), 0.0, 1.0);
        f.push(c(2), 0.0, 2.0);
        assert_eq!(f.pop().map(|e| e.cell), Some(c(1)));
        assert_eq!(f.pop().map(|e| e.cell), Some(c(2)));
        assert_eq!(f.pop().map(|e| e.cell), Some(c(0)));
        assert!(f.pop().is_none());
    }

    #[test]
    fn fifo_on_equal_priority() {
        let mut f = Frontier::new();
        for i in 0..5 {
            f.push(c(i), i as f64, 4.0);
        }
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).map(|e| e.cell.col).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn fractional_priorities() {
        let mut f = Frontier::new();
        f.push(c(0), 0.0, 2.0);
        f.push(c(1), 0.0, std::f64::consts::SQRT_2);
        assert_eq!(f.peek().map(|e| e.cell), Some(c(1)));
    }

    #[test]
    fn sequence_numbers_and_observers() {
        let mut f = Frontier::new();
        assert_eq!(f.push(c(0), 0.0, 5.0), 0);
        assert_eq!(f.push(c(0), 0.0, 1.0), 1);
        assert_eq!(f.push(c(2), 0.0, 1.0), 2);
        assert_eq!(f.len(), 3);
        assert_eq!(f.pushed(), 3);
        assert_eq!(f.iter().count(), 3);
        let sorted: Vec<_> = f.sorted().iter().map(|e| e.seq).collect();
        assert_eq!(sorted, vec![1, 2, 0]);
        f.pop();
        assert_eq!(f.len(), 2);
        assert_eq!(f.pushed(), 3);
        assert!(!f.is_empty());
    }
}
