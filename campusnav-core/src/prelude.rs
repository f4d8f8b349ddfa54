// Re-export key components
pub use crate::loading::{
    NetworkConfig, ParsedPath, build_walkway_network, create_walkway_network, parse_path_data,
};
pub use crate::model::{Junction, NodeKey, Walkway, WalkwayGraph, WalkwayNetwork};
pub use crate::routing::{
    Projection, Route, ShortestPath, assemble_route, project_onto_segments, shortest_path,
};

// Geometry primitives used across the public API
pub use geo::{Coord, Line};
pub use petgraph::graph::NodeIndex;

pub use crate::Error;
