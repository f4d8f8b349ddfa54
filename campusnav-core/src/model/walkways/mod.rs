//! Footpath network model

pub mod components;
pub mod network;

pub use components::{Junction, NodeKey, Walkway};
pub use network::{IndexedPoint, WalkwayGraph};
