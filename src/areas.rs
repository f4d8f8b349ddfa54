//! Static building footprints for map collision checks.
//!
//! Routing does not use these; they are served as-is to the map layer.

use std::sync::LazyLock;

use geo::{Coord, Rect};
use serde::Serialize;

/// Axis-aligned bounding box of a building on the campus map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingArea {
    pub id: &'static str,
    pub bounds: Rect<f64>,
}

// id, [min_x, min_y, max_x, max_y]
const AREA_BOUNDS: [(&str, [f64; 4]); 7] = [
    ("library", [130.0, 215.0, 220.0, 285.0]),
    ("admin", [285.0, 180.0, 355.0, 250.0]),
    ("science_hall", [585.0, 200.0, 655.0, 270.0]),
    ("student_center", [430.0, 340.0, 510.0, 430.0]),
    ("gymnasium", [770.0, 315.0, 835.0, 345.0]),
    ("dormitory", [130.0, 380.0, 220.0, 460.0]),
    ("boathouse", [890.0, 615.0, 940.0, 665.0]),
];

static BUILDING_AREAS: LazyLock<Vec<BuildingArea>> = LazyLock::new(|| {
    AREA_BOUNDS
        .iter()
        .map(|&(id, [min_x, min_y, max_x, max_y])| BuildingArea {
            id,
            bounds: Rect::new(Coord { x: min_x, y: min_y }, Coord { x: max_x, y: max_y }),
        })
        .collect()
});

/// Bounding boxes of every campus building
pub fn building_areas() -> &'static [BuildingArea] {
    &BUILDING_AREAS
}

pub fn building_area(id: &str) -> Option<&'static BuildingArea> {
    BUILDING_AREAS.iter().find(|area| area.id == id)
}
