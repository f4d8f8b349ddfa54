//! Bundled campus walkway geometry.
//!
//! Drawn in the campus map's SVG coordinate space. Endpoints that meet at a
//! junction were traced by hand and drift by up to a unit; the network
//! builder's merge epsilon joins them.

pub const CAMPUS_WALKWAYS: &str = concat!(
    // main quad spine, west to east
    "M100,300 L250,300 L400,300 L550,300 L700,300 L850,300 ",
    // north loop past the admin building
    "M250.6,299.4 L250,150 C330,118 470,118 550,150 L550,300.4 ",
    // science quad
    "M550,150 L700,150 L700,300 ",
    // south lawn loop around the student center
    "M400,300 l0,150 l150,0 l0,-150.5 ",
    // dormitory walk
    "M100,300 L100,500 L250,500 L400,450 ",
    // gym approach
    "M700,300 C720,380 800,420 850,450 L850,300.2 ",
    // lakeside boardwalk, reached only across the lawn
    "M880,600 L960,600 L960,660",
);
