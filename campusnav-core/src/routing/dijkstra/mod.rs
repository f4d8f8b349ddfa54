mod shortest_path;
mod state;

pub use shortest_path::{ShortestPath, shortest_path};
