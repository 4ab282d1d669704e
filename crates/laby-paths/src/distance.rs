use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use laby_core::Cell;

use crate::traits::Heuristic;

/// Always zero: turns A* into Dijkstra.
#[inline]
pub fn zero(_: Cell, _: Cell) -> f64 {
    0.0
}

/// Manhattan (L1) distance. Admissible for orthogonal unit-cost moves.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> f64 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as f64
}

/// Euclidean (L2) distance. Admissible for both movement models, but less
/// informed than [`manhattan`] or [`octile`].
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let dr = a.row.abs_diff(b.row) as f64;
    let dc = a.col.abs_diff(b.col) as f64;
    dr.hypot(dc)
}

/// Chebyshev (L∞) distance.
#[inline]
pub fn chebyshev(a: Cell, b: Cell) -> f64 {
    a.row.abs_diff(b.row).max(a.col.abs_diff(b.col)) as f64
}

/// Octile distance: exact cost on an empty grid with unit orthogonal moves
/// and √2 diagonal moves.
#[inline]
pub fn octile(a: Cell, b: Cell) -> f64 {
    let dr = a.row.abs_diff(b.row);
    let dc = a.col.abs_diff(b.col);
    let (lo, hi) = (dr.min(dc) as f64, dr.max(dc) as f64);
    (hi - lo) + SQRT_2 * lo
}

/// The built-in heuristics, selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Distance {
    Zero,
    #[default]
    Manhattan,
    Euclidean,
    Chebyshev,
    Octile,
}

impl Distance {
    pub const ALL: [Distance; 5] = [
        Distance::Zero,
        Distance::Manhattan,
        Distance::Euclidean,
        Distance::Chebyshev,
        Distance::Octile,
    ];

    /// Lower-case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Distance::Zero => "zero",
            Distance::Manhattan => "manhattan",
            Distance::Euclidean => "euclidean",
            Distance::Chebyshev => "chebyshev",
            Distance::Octile => "octile",
        }
    }
}

impl Heuristic for Distance {
    #[inline]
    fn estimate(&self, from: Cell, goal: Cell) -> f64 {
        match self {
            Distance::Zero => zero(from, goal),
            Distance::Manhattan => manhattan(from, goal),
            Distance::Euclidean => euclidean(from, goal),
            Distance::Chebyshev => chebyshev(from, goal),
            Distance::Octile => octile(from, goal),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown heuristic name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown heuristic {0:?} (expected zero, dijkstra, manhattan, euclidean, chebyshev or octile)")]
pub struct ParseDistanceError(pub String);

impl FromStr for Distance {
    type Err = ParseDistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zero" | "dijkstra" => Ok(Distance::Zero),
            "manhattan" => Ok(Distance::Manhattan),
            "euclidean" => Ok(Distance::Euclidean),
            "chebyshev" => Ok(Distance::Chebyshev),
            "octile" => Ok(Distance::Octile),
            _ => Err(ParseDistanceError(s.to_string())),
        }
    }
}
