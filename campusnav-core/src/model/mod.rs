//! Data model for campus walkway routing
//!
//! Contains the junction graph built from footpath geometry and the
//! network that bundles it with its source segments.

pub mod walkway_network;
pub mod walkways;

pub use walkway_network::{WalkwayNetwork, WalkwayNetworkMeta};
pub use walkways::{IndexedPoint, Junction, NodeKey, Walkway, WalkwayGraph};

use geo::{Coord, Distance, Euclidean, Point};

/// Planar distance between two map coordinates
pub(crate) fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    Euclidean.distance(Point::from(a), Point::from(b))
}

pub(crate) fn is_finite(coord: Coord<f64>) -> bool {
    coord.x.is_finite() && coord.y.is_finite()
}
