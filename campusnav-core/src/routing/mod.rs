//! Routing between arbitrary points over the walkway network

pub mod dijkstra;
pub mod projection;
pub mod route;

pub use dijkstra::{ShortestPath, shortest_path};
pub use projection::{Projection, project_onto_segments};
pub use route::{Route, assemble_route};
