//! Junction graph with a spatial index over junction positions

use geo::{Coord, Line};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rstar::{RTree, primitives::GeomWithData};

use super::components::{Junction, NodeKey, Walkway};
use crate::model::distance;

/// Junction position paired with its graph node
pub type IndexedPoint = GeomWithData<[f64; 2], NodeIndex>;

/// Undirected footpath graph.
///
/// Edges are stored once and traversed in both directions, so every walkway
/// `u - v` of length `w` is seen as `u -> v` and `v -> u` with the same `w`.
#[derive(Debug, Clone)]
pub struct WalkwayGraph {
    pub(crate) graph: UnGraph<Junction, Walkway>,
    pub(crate) rtree: RTree<IndexedPoint>,
    merge_epsilon: f64,
    key_precision: f64,
}

impl WalkwayGraph {
    pub fn new(merge_epsilon: f64, key_precision: f64) -> Self {
        Self {
            graph: UnGraph::default(),
            rtree: RTree::new(),
            merge_epsilon,
            key_precision,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn merge_epsilon(&self) -> f64 {
        self.merge_epsilon
    }

    pub fn junction(&self, node: NodeIndex) -> Option<&Junction> {
        self.graph.node_weight(node)
    }

    pub fn position(&self, node: NodeIndex) -> Option<Coord<f64>> {
        self.graph.node_weight(node).map(|junction| junction.geometry)
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Every walkway once, as `(a, b, length)`
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, f64)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target(), edge.weight().length))
    }

    /// Neighbours of `node` with the length of the connecting walkway
    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.graph
            .edges(node)
            .map(|edge| (edge.target(), edge.weight().length))
    }

    /// Length of the walkway between `a` and `b`, if they are connected
    pub fn walkway_length(&self, a: NodeIndex, b: NodeIndex) -> Option<f64> {
        self.graph
            .find_edge(a, b)
            .and_then(|edge| self.graph.edge_weight(edge))
            .map(|walkway| walkway.length)
    }

    /// Junction that `coord` merges into: the earliest registered junction
    /// within merge epsilon.
    pub fn junction_at(&self, coord: Coord<f64>) -> Option<NodeIndex> {
        let radius = self.merge_epsilon * self.merge_epsilon;
        self.rtree
            .locate_within_distance([coord.x, coord.y], radius)
            .map(|point| point.data)
            .min()
    }

    /// Resolves `coord` to its junction, registering a new one when no
    /// existing junction lies within merge epsilon.
    pub(crate) fn merge_junction(&mut self, coord: Coord<f64>) -> NodeIndex {
        if let Some(node) = self.junction_at(coord) {
            return node;
        }

        let node = self.graph.add_node(Junction {
            key: NodeKey::from_coord(coord, self.key_precision),
            geometry: coord,
        });
        self.rtree
            .insert(IndexedPoint::new([coord.x, coord.y], node));
        node
    }

    /// Adds a walkway between two junctions. Returns `false` when the pair
    /// is already connected or both ends merged into the same junction.
    pub(crate) fn connect(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        if a == b || self.graph.find_edge(a, b).is_some() {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(a), self.position(b)) else {
            return false;
        };

        self.graph.add_edge(
            a,
            b,
            Walkway {
                length: distance(from, to),
            },
        );
        true
    }

    /// Nearest junction to an arbitrary point
    pub fn nearest_node(&self, coord: Coord<f64>) -> Option<(NodeIndex, f64)> {
        self.rtree
            .nearest_neighbor(&[coord.x, coord.y])
            .map(|point| {
                let [x, y] = *point.geom();
                (point.data, distance(coord, Coord { x, y }))
            })
    }

    /// Graph node for a point projected onto `segment`.
    ///
    /// Prefers whichever of the segment's merged endpoints lies nearer the
    /// projected point. Falls back to the globally nearest junction when
    /// neither endpoint resolves to a junction.
    pub fn node_for_projection(
        &self,
        segment: &Line<f64>,
        projected: Coord<f64>,
    ) -> Option<NodeIndex> {
        let endpoint = [segment.start, segment.end]
            .into_iter()
            .filter_map(|end| self.junction_at(end))
            .filter_map(|node| self.position(node).map(|at| (node, distance(at, projected))))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(node, _)| node);

        endpoint.or_else(|| {
            log::debug!("No merged endpoint for segment {segment:?}, using nearest junction");
            self.nearest_node(projected).map(|(node, _)| node)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn corner() -> WalkwayGraph {
        let mut graph = WalkwayGraph::new(3.0, 1.0);
        let a = graph.merge_junction(Coord { x: 0.0, y: 0.0 });
        let b = graph.merge_junction(Coord { x: 10.0, y: 0.0 });
        let c = graph.merge_junction(Coord { x: 10.0, y: 10.0 });
        graph.connect(a, b);
        graph.connect(b, c);
        graph
    }

    #[rstest]
    fn near_duplicate_endpoints_merge_into_first_seen(mut corner: WalkwayGraph) {
        let drifted = corner.merge_junction(Coord { x: 10.8, y: -0.4 });
        assert_eq!(drifted, NodeIndex::new(1));
        assert_eq!(corner.node_count(), 3);
        assert_eq!(
            corner.position(drifted),
            Some(Coord { x: 10.0, y: 0.0 })
        );
    }

    #[rstest]
    fn merge_prefers_earliest_junction_when_several_are_in_range() {
        let mut graph = WalkwayGraph::new(3.0, 1.0);
        let first = graph.merge_junction(Coord { x: 0.0, y: 0.0 });
        let second = graph.merge_junction(Coord { x: 4.0, y: 0.0 });
        assert_ne!(first, second);
        // 2 units from both, the earlier registration wins
        assert_eq!(graph.merge_junction(Coord { x: 2.0, y: 0.0 }), first);
    }

    #[rstest]
    fn connect_skips_loops_and_parallel_edges(mut corner: WalkwayGraph) {
        let a = NodeIndex::new(0);
        let b = NodeIndex::new(1);
        assert!(!corner.connect(a, b));
        assert!(!corner.connect(b, a));
        assert!(!corner.connect(a, a));
        assert_eq!(corner.edge_count(), 2);
    }

    #[rstest]
    fn walkways_are_symmetric(corner: WalkwayGraph) {
        for (a, b, length) in corner.edges() {
            assert_eq!(corner.walkway_length(a, b), Some(length));
            assert_eq!(corner.walkway_length(b, a), Some(length));
            assert!(corner.neighbors(b).any(|(n, w)| n == a && w == length));
        }
    }

    #[rstest]
    fn nearest_node_reports_distance(corner: WalkwayGraph) {
        let (node, dist) = corner.nearest_node(Coord { x: 9.0, y: 12.0 }).unwrap();
        assert_eq!(node, NodeIndex::new(2));
        assert!((dist - 5f64.sqrt()).abs() < 1e-9);
    }

    #[rstest]
    #[case(Coord { x: 2.0, y: 0.0 }, 0)]
    #[case(Coord { x: 7.0, y: 0.0 }, 1)]
    fn projection_picks_nearer_endpoint(
        corner: WalkwayGraph,
        #[case] projected: Coord<f64>,
        #[case] expected: usize,
    ) {
        let segment = Line::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 10.0, y: 0.0 });
        assert_eq!(
            corner.node_for_projection(&segment, projected),
            Some(NodeIndex::new(expected))
        );
    }

    #[rstest]
    fn projection_falls_back_to_nearest_junction(corner: WalkwayGraph) {
        let stray = Line::new(Coord { x: 50.0, y: 50.0 }, Coord { x: 60.0, y: 50.0 });
        assert_eq!(
            corner.node_for_projection(&stray, Coord { x: 50.0, y: 50.0 }),
            Some(NodeIndex::new(2))
        );
    }

    #[test]
    fn empty_graph_has_no_nearest_node() {
        let graph = WalkwayGraph::new(3.0, 1.0);
        assert!(graph.is_empty());
        assert!(graph.nearest_node(Coord { x: 0.0, y: 0.0 }).is_none());
    }
}
