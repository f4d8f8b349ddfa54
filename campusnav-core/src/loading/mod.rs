//! This module is responsible for turning authored path data into a
//! routable walkway network.

mod builder;
mod config;
mod path_data;

pub use builder::{build_walkway_graph, build_walkway_network, create_walkway_network};
pub use config::NetworkConfig;
pub use path_data::{ParsedPath, parse_path_data};
