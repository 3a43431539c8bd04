//! Convex hull builders and boundary recovery.
//!
//! Purpose
//! - `gift_wrapping`: traces the hull one vertex at a time, always taking the
//!   straightest continuation (maximal dot-turn) from the current edge.
//! - `quick_hull`: divide and conquer on the farthest point from a base edge.
//! - `get_convex_hull_lines`: turns an unordered vertex set into a closed cycle
//!   of directed boundary edges (counter-clockwise).
//!
//! Conventions
//! - Inputs are borrowed slices; outputs are fresh `Vec`s holding copies of
//!   input points (no fabricated vertices).
//! - Quickhull ties resolve to the first candidate in input order. Gift
//!   wrapping breaks ties toward the farther candidate, then input order.
//! - Running maxima are tracked as `Option<(Point, f64)>`; NaN scores are skipped.

mod edges;
mod gift;
mod quick;

pub use edges::{get_convex_hull_lines, hull_lines_by_angle};
pub use gift::gift_wrapping;
pub use quick::{find_hull, quick_hull};

use crate::geom::Point;
use std::fmt;
use std::str::FromStr;

/// Errors surfaced by the hull builders.
#[derive(Debug, Clone, PartialEq)]
pub enum HullError {
    /// The point set cannot be processed at all (e.g. it is empty).
    InvalidInput { reason: String },
    /// The input is degenerate enough that the builder could not terminate normally.
    DegenerateInput { reason: String },
}

impl HullError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::DegenerateInput { reason } => write!(f, "degenerate input: {reason}"),
        }
    }
}

impl std::error::Error for HullError {}

/// Hull construction algorithm selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullAlgorithm {
    QuickHull,
    GiftWrapping,
}

impl HullAlgorithm {
    pub const ALL: [HullAlgorithm; 2] = [HullAlgorithm::QuickHull, HullAlgorithm::GiftWrapping];

    /// Run the selected builder on `points`.
    pub fn compute(self, points: &[Point]) -> Result<Vec<Point>, HullError> {
        match self {
            HullAlgorithm::QuickHull => quick_hull(points),
            HullAlgorithm::GiftWrapping => gift_wrapping(points),
        }
    }

    /// Short name used in file names and logs.
    pub fn name(self) -> &'static str {
        match self {
            HullAlgorithm::QuickHull => "quickhull",
            HullAlgorithm::GiftWrapping => "giftwrapping",
        }
    }
}

impl fmt::Display for HullAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HullAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quick" | "quickhull" => Ok(HullAlgorithm::QuickHull),
            "gift" | "giftwrapping" | "gift-wrapping" | "jarvis" => Ok(HullAlgorithm::GiftWrapping),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Name that `HullAlgorithm::from_str` does not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown hull algorithm `{}` (expected quick, quickhull, gift, giftwrapping or jarvis)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

/// Keep `candidate` if it strictly beats the running maximum (first maximum wins).
#[inline]
fn update_best(best: &mut Option<(Point, f64)>, candidate: Point, score: f64) {
    if score.is_nan() {
        return;
    }
    if best.as_ref().is_none_or(|(_, b)| score > *b) {
        *best = Some((candidate, score));
    }
}
