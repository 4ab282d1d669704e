//! Maze generation.
//!
//! The spanning structure comes from the Aldous–Broder random walk: wander
//! the room lattice at random and, every time the walk enters a room for the
//! first time, knock down the wall it came through. The result is a tree
//! over the rooms (a perfect maze). Braiding then knocks down a fraction of
//! the remaining interior walls to create loops.

use laby_core::{Cell, Direction};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::config::{MazeConfig, validate_ratio};
use crate::error::Result;
use crate::lattice::RoomLattice;
use crate::maze::GeneratedMaze;

/// Counters reported by [`MazeGen::aldous_broder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Moves between rooms, including moves into already visited rooms.
    pub steps: usize,
    /// Direction draws that pointed outside the lattice and were redrawn.
    pub rejected: usize,
}

/// Maze generator owning its random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl MazeGen<StdRng> {
    /// Generator seeded from `seed`: same seed, same maze.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator for a config: seeded when the config carries a seed,
    /// otherwise seeded from the thread RNG.
    pub fn from_config(cfg: &MazeConfig) -> Self {
        match cfg.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(StdRng::from_rng(&mut rand::rng())),
        }
    }
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `room_rows x room_cols` maze and braid it with
    /// `destruction_ratio`.
    ///
    /// The entry is the top-left room and the exit the bottom-right one.
    pub fn generate(
        &mut self,
        room_rows: usize,
        room_cols: usize,
        destruction_ratio: f64,
    ) -> Result<GeneratedMaze> {
        validate_ratio(destruction_ratio)?;
        let mut lattice = RoomLattice::new(room_rows, room_cols)?;
        log::debug!(
            "generating {room_rows}x{room_cols} maze, destruction ratio {destruction_ratio}"
        );

        self.aldous_broder(&mut lattice);
        let braided = self.braid(&mut lattice, destruction_ratio)?;
        GeneratedMaze::from_lattice(lattice, braided)
    }

    /// Generate a maze from a config. The config's seed is not consulted
    /// here; it only matters to [`MazeGen::from_config`].
    pub fn generate_with(&mut self, cfg: &MazeConfig) -> Result<GeneratedMaze> {
        cfg.validate()?;
        self.generate(cfg.room_rows, cfg.room_cols, cfg.destruction_ratio)
    }

    /// Carve a spanning tree into `lattice` with the Aldous–Broder walk.
    ///
    /// Starts at a uniformly random room and stops once every room has been
    /// visited. The walk has no step cap: it ends almost surely, after the
    /// cover time of the lattice.
    pub fn aldous_broder(&mut self, lattice: &mut RoomLattice) -> WalkStats {
        let (rows, cols) = (lattice.room_rows(), lattice.room_cols());
        let total = rows * cols;
        let mut visited = vec![false; total];
        let mut n_visited = 0;
        let mut stats = WalkStats::default();

        let mut room = Cell::new(
            self.rng.random_range(0..rows) as i32,
            self.rng.random_range(0..cols) as i32,
        );

        loop {
            let i = room.row as usize * cols + room.col as usize;
            if !visited[i] {
                visited[i] = true;
                n_visited += 1;
            }
            if n_visited == total {
                break;
            }

            let (dir, next) = loop {
                let dir = Direction::CARDINAL[self.rng.random_range(0..4)];
                let next = room.step(dir);
                if lattice.contains_room(next) {
                    break (dir, next);
                }
                log::trace!("rejected step {dir:?} from room {room}");
                stats.rejected += 1;
            };

            if !visited[next.row as usize * cols + next.col as usize] {
                lattice.carve(room, dir);
            }
            room = next;
            stats.steps += 1;
        }

        log::debug!(
            "spanning walk covered {total} rooms in {} steps ({} rejected draws)",
            stats.steps,
            stats.rejected
        );
        stats
    }

    /// Open `floor(ratio * n)` of the `n` closed interior walls, chosen
    /// uniformly without replacement. The outer border is left intact.
    ///
    /// Returns the number of walls opened.
    pub fn braid(&mut self, lattice: &mut RoomLattice, ratio: f64) -> Result<usize> {
        validate_ratio(ratio)?;
        let walls = lattice.closed_interior();
        let k = ((ratio * walls.len() as f64).floor() as usize).min(walls.len());
        if k > 0 {
            for i in index::sample(&mut self.rng, walls.len(), k).iter() {
                lattice.open(walls[i]);
            }
        }
        log::debug!("braiding opened {k} of {} interior walls", walls.len());
        Ok(k)
    }
}
