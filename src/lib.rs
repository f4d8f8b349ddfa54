//! Campus walking routes between buildings.
//!
//! [`CampusRouter`] is the entry point used by the map layer: it resolves
//! building ids through a [`BuildingDirectory`], routes between their
//! centers over the bundled campus walkways and returns drawable waypoints.

pub mod areas;
pub mod campus;
pub mod directory;
pub mod matrix;
pub mod router;
pub mod routing;

pub use areas::{BuildingArea, building_area, building_areas};
pub use campus::CAMPUS_WALKWAYS;
pub use directory::{Building, BuildingDirectory, JsonFileDirectory, StaticDirectory};
pub use router::CampusRouter;

pub use campusnav_core::{Error, NetworkConfig, Route, WalkwayNetwork};
pub use geo::Coord;
