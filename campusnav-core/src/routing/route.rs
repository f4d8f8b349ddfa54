//! Stitching projections and the junction path into a drawable route

mod to_geojson;

use geo::Coord;
use itertools::Itertools;
use petgraph::graph::NodeIndex;

use super::{Projection, project_onto_segments, shortest_path};
use crate::model::{WalkwayNetwork, distance, is_finite};

/// Consecutive waypoints closer than this are collapsed into one
const WAYPOINT_EPSILON: f64 = 1e-9;

/// Drawable walking route between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub waypoints: Vec<Coord<f64>>,
    /// Length of the polyline through `waypoints`
    pub length: f64,
    /// `false` when no walkway path joined the two ends and the route only
    /// leads each point onto the network
    pub connected: bool,
}

impl Route {
    fn from_waypoints(points: impl IntoIterator<Item = Coord<f64>>, connected: bool) -> Self {
        let mut waypoints: Vec<Coord<f64>> = Vec::new();
        for point in points {
            let repeated = waypoints
                .last()
                .is_some_and(|last| distance(*last, point) < WAYPOINT_EPSILON);
            if !repeated {
                waypoints.push(point);
            }
        }

        let length = waypoints
            .iter()
            .tuple_windows()
            .map(|(a, b)| distance(*a, *b))
            .sum();

        Self {
            waypoints,
            length,
            connected,
        }
    }

    pub fn waypoints(&self) -> &[Coord<f64>] {
        &self.waypoints
    }

    pub fn into_waypoints(self) -> Vec<Coord<f64>> {
        self.waypoints
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

/// `candidate` unless it has a non-finite coordinate, then `fallback`
fn finite_or(candidate: Coord<f64>, fallback: Coord<f64>) -> Coord<f64> {
    if is_finite(candidate) { candidate } else { fallback }
}

/// Junction that a projection enters the graph through
fn entry_node(network: &WalkwayNetwork, projection: &Projection) -> Option<NodeIndex> {
    network
        .segments
        .get(projection.segment_index)
        .and_then(|segment| network.graph.node_for_projection(segment, projection.point))
        .or_else(|| {
            network
                .graph
                .nearest_node(projection.point)
                .map(|(node, _)| node)
        })
}

/// Assembles the walking route from `from` to `to`.
///
/// The result runs from `from` to its projection onto the network, along the
/// shortest walkway path between the junctions nearest those projections, then
/// off the network to `to`. Without a walkway path the route keeps only the
/// two points and their projections.
pub fn assemble_route(network: &WalkwayNetwork, from: Coord<f64>, to: Coord<f64>) -> Route {
    let origin = project_onto_segments(&network.segments, from);
    let destination = project_onto_segments(&network.segments, to);
    let origin_point = finite_or(origin.point, from);
    let destination_point = finite_or(destination.point, to);

    log::debug!(
        "Projected {from:?} -> {origin_point:?} (segment {}), {to:?} -> {destination_point:?} (segment {})",
        origin.segment_index,
        destination.segment_index
    );

    let path = entry_node(network, &origin)
        .zip(entry_node(network, &destination))
        .and_then(|(start, end)| shortest_path(&network.graph, start, end));

    let Some(path) = path else {
        log::debug!("No walkway path from {from:?} to {to:?}, returning degraded route");
        return Route::from_waypoints([from, origin_point, destination_point, to], false);
    };

    let interior = path.nodes.iter().filter_map(|&node| {
        network
            .graph
            .position(node)
            .map(|at| finite_or(at, origin_point))
    });

    Route::from_waypoints(
        std::iter::once(from)
            .chain(std::iter::once(origin_point))
            .chain(interior)
            .chain([destination_point, to]),
        true,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NetworkConfig, create_walkway_network};
    use rstest::{fixture, rstest};

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[fixture]
    fn corner() -> WalkwayNetwork {
        create_walkway_network("M0,0 L10,0 L10,10", &NetworkConfig::default()).unwrap()
    }

    #[rstest]
    fn corner_route_follows_the_walkways(corner: WalkwayNetwork) {
        let route = assemble_route(&corner, c(2.0, 5.0), c(10.0, 12.0));
        assert_eq!(
            route.waypoints,
            vec![
                c(2.0, 5.0),
                c(2.0, 0.0),
                c(0.0, 0.0),
                c(10.0, 0.0),
                c(10.0, 10.0),
                c(10.0, 12.0)
            ]
        );
        assert!(route.connected);
        // 5 + 2 + 10 + 10 + 2
        assert!((route.length - 29.0).abs() < 1e-9);
    }

    #[rstest]
    fn self_route_starts_and_ends_at_the_point(corner: WalkwayNetwork) {
        let route = assemble_route(&corner, c(4.0, 3.0), c(4.0, 3.0));
        assert_eq!(route.waypoints.first(), Some(&c(4.0, 3.0)));
        assert_eq!(route.waypoints.last(), Some(&c(4.0, 3.0)));
        assert!(route.connected);
    }

    #[test]
    fn disconnected_ends_get_a_degraded_route() {
        let network = create_walkway_network(
            "M0,0 L10,0 M100,0 L110,0",
            &NetworkConfig::default(),
        )
        .unwrap();
        let route = assemble_route(&network, c(5.0, 4.0), c(105.0, -4.0));
        assert!(!route.connected);
        assert_eq!(
            route.waypoints,
            vec![c(5.0, 4.0), c(5.0, 0.0), c(105.0, 0.0), c(105.0, -4.0)]
        );
    }

    #[test]
    fn empty_network_degrades_to_the_two_points() {
        let network = create_walkway_network("", &NetworkConfig::default()).unwrap();
        let route = assemble_route(&network, c(1.0, 1.0), c(4.0, 5.0));
        assert!(!route.connected);
        assert_eq!(route.waypoints, vec![c(1.0, 1.0), c(4.0, 5.0)]);
        assert!((route.length - 5.0).abs() < 1e-9);
    }

    #[rstest]
    fn repeated_queries_are_identical(corner: WalkwayNetwork) {
        let first = assemble_route(&corner, c(2.0, 5.0), c(10.0, 12.0));
        let second = assemble_route(&corner, c(2.0, 5.0), c(10.0, 12.0));
        assert_eq!(first, second);
    }

    #[rstest]
    fn all_waypoints_are_finite(corner: WalkwayNetwork) {
        let route = assemble_route(&corner, c(-1e300, 1e300), c(1e300, -1e300));
        assert!(route.waypoints.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}
