//! Walkway network components - junctions and walkways

use std::fmt;

use geo::Coord;

/// Stable integer identity of a junction.
///
/// Taken from the junction's first-seen coordinate, rounded to the
/// configured key precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    pub x: i64,
    pub y: i64,
}

impl NodeKey {
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_coord(coord: Coord<f64>, precision: f64) -> Self {
        // float -> int `as` casts saturate, so NaN maps to 0
        Self {
            x: (coord.x / precision).round() as i64,
            y: (coord.y / precision).round() as i64,
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Walkway graph node
#[derive(Debug, Clone)]
pub struct Junction {
    pub key: NodeKey,
    /// Canonical coordinates, the first endpoint registered for this junction
    pub geometry: Coord<f64>,
}

/// Walkway graph edge
#[derive(Debug, Clone, Copy)]
pub struct Walkway {
    /// Euclidean distance between the two junctions, in map units
    pub length: f64,
}
