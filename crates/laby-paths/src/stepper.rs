//! A* as a resumable state machine.
//!
//! [`AstarStepper`] performs one unit of work per [`step`](AstarStepper::step)
//! call and keeps all of its state between calls, so a driver can observe
//! the frontier and the closed set between expansions. The one-shot search
//! ([`PathSearch::find_path`](crate::PathSearch::find_path)) is this machine
//! run to completion.
//!
//! Phases: `Searching` pops one frontier entry per step and relaxes its
//! neighbours; popping the exit switches to `Backtracking`, which walks one
//! parent link per step; running past the start switches to `Done`.

use std::collections::{HashMap, HashSet};

use laby_core::{Cell, Maze};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::moves::{Movement, Neighbors};
use crate::path::Path;
use crate::traits::Heuristic;

/// Current phase of an [`AstarStepper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Searching,
    Backtracking,
    Done,
}

/// What a single [`AstarStepper::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cell was expanded: its neighbours were relaxed.
    Expanded(Cell),
    /// A superseded frontier entry for the cell was discarded.
    Skipped(Cell),
    /// The exit was popped; its cost is final.
    Reached(Cell),
    /// The cell was appended to the backtracked path.
    Traced(Cell),
    /// Backtracking ran past the start; the path is complete.
    Finished,
    /// Nothing left to do.
    Idle,
}

/// Steppable best-first search from a maze's start to its exit.
pub struct AstarStepper<'a, M: Maze + ?Sized, H: Heuristic + ?Sized> {
    maze: &'a M,
    heuristic: &'a H,
    movement: Movement,
    goal: Cell,
    frontier: Frontier,
    g_cost: HashMap<Cell, f64>,
    parent: HashMap<Cell, Option<Cell>>,
    closed: HashSet<Cell>,
    neighbors: Neighbors,
    phase: Phase,
    cursor: Option<Cell>,
    trail: Vec<Cell>,
    expansions: usize,
}

impl<'a, M: Maze + ?Sized, H: Heuristic + ?Sized> AstarStepper<'a, M, H> {
    /// Seed a search on `maze`.
    ///
    /// Fails fast if the maze's start or exit is not a cell it contains.
    pub fn new(maze: &'a M, heuristic: &'a H, movement: Movement) -> Result<Self, SearchError> {
        let start = maze.start();
        let goal = maze.out();
        if !maze.contains(start) {
            return Err(SearchError::BlockedEndpoint {
                role: "start",
                cell: start,
            });
        }
        if !maze.contains(goal) {
            return Err(SearchError::BlockedEndpoint {
                role: "exit",
                cell: goal,
            });
        }
        log::debug!("searching {start} -> {goal} with {movement} movement");

        let mut frontier = Frontier::new();
        frontier.push(start, 0.0, heuristic.estimate(start, goal));
        Ok(Self {
            maze,
            heuristic,
            movement,
            goal,
            frontier,
            g_cost: HashMap::from([(start, 0.0)]),
            parent: HashMap::from([(start, None)]),
            closed: HashSet::new(),
            neighbors: Neighbors::new(),
            phase: Phase::Searching,
            cursor: None,
            trail: Vec::new(),
            expansions: 0,
        })
    }

    /// Perform one unit of work.
    ///
    /// Returns [`SearchError::Unsolvable`] if the frontier runs dry while
    /// searching. Once [`Phase::Done`] is reached every call returns
    /// [`Step::Idle`].
    pub fn step(&mut self) -> Result<Step, SearchError> {
        match self.phase {
            Phase::Searching => self.search_step(),
            Phase::Backtracking => Ok(self.backtrack_step()),
            Phase::Done => Ok(Step::Idle),
        }
    }

    /// Step until done and return the path.
    pub fn run(&mut self) -> Result<Path, SearchError> {
        while self.phase != Phase::Done {
            self.step()?;
        }
        Ok(self.build_path())
    }

    fn search_step(&mut self) -> Result<Step, SearchError> {
        let Some(entry) = self.frontier.pop() else {
            log::debug!("frontier exhausted after {} expansions", self.expansions);
            return Err(SearchError::Unsolvable {
                expansions: self.expansions,
            });
        };
        let cell = entry.cell;

        let best = self.g_cost.get(&cell).copied().unwrap_or(f64::INFINITY);
        if self.closed.contains(&cell) || entry.g > best {
            return Ok(Step::Skipped(cell));
        }

        if cell == self.goal {
            log::debug!(
                "reached {cell} at cost {} after {} expansions",
                entry.g,
                self.expansions
            );
            self.phase = Phase::Backtracking;
            self.cursor = Some(cell);
            return Ok(Step::Reached(cell));
        }

        self.closed.insert(cell);
        self.expansions += 1;

        for &(next, cost) in self.neighbors.of(self.maze, cell, self.movement) {
            let candidate = entry.g + cost;
            if self.g_cost.get(&next).is_some_and(|&old| candidate >= old) {
                continue;
            }
            self.g_cost.insert(next, candidate);
            self.parent.insert(next, Some(cell));
            if self.closed.remove(&next) {
                log::trace!("reopened {next} at cost {candidate}");
            }
            let priority = candidate + self.heuristic.estimate(next, self.goal);
            self.frontier.push(next, candidate, priority);
        }
        Ok(Step::Expanded(cell))
    }

    fn backtrack_step(&mut self) -> Step {
        match self.cursor {
            Some(cell) => {
                self.trail.push(cell);
                self.cursor = self.parent.get(&cell).copied().flatten();
                Step::Traced(cell)
            }
            None => {
                self.phase = Phase::Done;
                Step::Finished
            }
        }
    }

    fn build_path(&self) -> Path {
        let cells = self.trail.iter().rev().copied().collect();
        let cost = self.g_cost.get(&self.goal).copied().unwrap_or(0.0);
        Path::new(cells, cost)
    }

    // -----------------------------------------------------------------------
    // Read-only queries for drivers
    // -----------------------------------------------------------------------

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the path has been fully backtracked.
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Movement model the search expands with.
    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// The exit being searched for.
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Cells discovered but not yet expanded.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Cells whose cost is final.
    pub fn closed(&self) -> &HashSet<Cell> {
        &self.closed
    }

    /// Best known cost from the start to `cell`.
    pub fn g_cost(&self, cell: Cell) -> Option<f64> {
        self.g_cost.get(&cell).copied()
    }

    /// Predecessor of `cell` on its best known route.
    pub fn parent(&self, cell: Cell) -> Option<Cell> {
        self.parent.get(&cell).copied().flatten()
    }

    /// Cells backtracked so far, from the exit towards the start.
    pub fn trail(&self) -> &[Cell] {
        &self.trail
    }

    /// Next cell to be backtracked.
    pub fn cursor(&self) -> Option<Cell> {
        self.cursor
    }

    /// Number of cells expanded so far.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// The finished path, once [`Phase::Done`] is reached.
    pub fn path(&self) -> Option<Path> {
        self.is_done().then(|| self.build_path())
    }
}
