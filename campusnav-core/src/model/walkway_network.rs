use geo::Line;

use super::WalkwayGraph;

/// Parse and build diagnostics kept alongside the network
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkwayNetworkMeta {
    /// Path tokens the parser could not interpret
    pub skipped_tokens: usize,
    /// Segments dropped as degenerate or as repeats of their predecessor
    pub dropped_segments: usize,
}

/// Routable campus footpath network.
///
/// Immutable once built: the ordered segment list used for projections and
/// the junction graph derived from it.
#[derive(Debug, Clone)]
pub struct WalkwayNetwork {
    pub segments: Vec<Line<f64>>,
    pub graph: WalkwayGraph,
    pub meta: WalkwayNetworkMeta,
}

impl WalkwayNetwork {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn junction_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn walkway_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn skipped_tokens(&self) -> usize {
        self.meta.skipped_tokens
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() || self.graph.is_empty()
    }

    pub fn network_info(&self) -> String {
        format!(
            "{} segments, {} junctions, {} walkways ({} skipped path tokens)",
            self.segment_count(),
            self.junction_count(),
            self.walkway_count(),
            self.meta.skipped_tokens
        )
    }
}
