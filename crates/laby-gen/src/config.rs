use crate::error::{GenError, Result};

/// Inputs of a maze generation run.
///
/// Dimensions count rooms, not matrix cells: a `room_rows x room_cols`
/// lattice yields a `(2 * room_rows + 1) x (2 * room_cols + 1)` grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    pub room_rows: usize,
    pub room_cols: usize,
    /// Fraction of the interior walls left after the spanning walk that get
    /// knocked down. `0` keeps a perfect maze, `1` leaves only the border.
    pub destruction_ratio: f64,
    /// Seed for a reproducible maze. `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            room_rows: 10,
            room_cols: 10,
            destruction_ratio: 0.0,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// A perfect maze of the given room dimensions.
    pub fn new(room_rows: usize, room_cols: usize) -> Self {
        Self {
            room_rows,
            room_cols,
            ..Self::default()
        }
    }

    /// Set the braiding ratio.
    pub fn with_destruction_ratio(mut self, ratio: f64) -> Self {
        self.destruction_ratio = ratio;
        self
    }

    /// Fix the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject empty lattices and ratios outside `[0, 1]` (including NaN).
    pub fn validate(&self) -> Result<()> {
        if self.room_rows == 0 || self.room_cols == 0 {
            return Err(GenError::NoRooms {
                room_rows: self.room_rows,
                room_cols: self.room_cols,
            });
        }
        validate_ratio(self.destruction_ratio)
    }
}

pub(crate) fn validate_ratio(ratio: f64) -> Result<()> {
    if (0.0..=1.0).contains(&ratio) {
        Ok(())
    } else {
        Err(GenError::RatioOutOfRange(ratio))
    }
}
