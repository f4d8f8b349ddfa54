//! Walking routes over a hand-authored campus footpath network.
//!
//! The network arrives as vector path data drawn for rendering. It is
//! parsed into straight segments, near-duplicate endpoints are merged into
//! junctions, and routes are found with Dijkstra over the resulting
//! undirected graph. Arbitrary points (building centers) join the network
//! through their orthogonal projection onto the nearest segment.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{
    NetworkConfig, ParsedPath, build_walkway_network, create_walkway_network, parse_path_data,
};
pub use model::{Junction, NodeKey, Walkway, WalkwayGraph, WalkwayNetwork};
pub use routing::{
    Projection, Route, ShortestPath, assemble_route, project_onto_segments, shortest_path,
};
