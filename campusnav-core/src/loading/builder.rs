use geo::Line;
use log::{info, warn};

use super::config::NetworkConfig;
use super::path_data::parse_path_data;
use crate::{
    Error,
    model::{WalkwayGraph, WalkwayNetwork, WalkwayNetworkMeta},
};

/// Creates a walkway network from authored path data
///
/// # Errors
///
/// Returns an error if the configuration holds invalid tolerances. Malformed
/// path data is never an error; unreadable parts are skipped and counted.
pub fn create_walkway_network(
    path_data: &str,
    config: &NetworkConfig,
) -> Result<WalkwayNetwork, Error> {
    config.validate()?;
    Ok(build_walkway_network(path_data, config))
}

/// Builds a walkway network with an already validated configuration
pub fn build_walkway_network(path_data: &str, config: &NetworkConfig) -> WalkwayNetwork {
    let parsed = parse_path_data(path_data, config.min_segment_length);
    if parsed.skipped_tokens > 0 {
        warn!(
            "Skipped {} unreadable tokens in walkway path data",
            parsed.skipped_tokens
        );
    }

    let graph = build_walkway_graph(&parsed.segments, config);

    let network = WalkwayNetwork {
        segments: parsed.segments,
        graph,
        meta: WalkwayNetworkMeta {
            skipped_tokens: parsed.skipped_tokens,
            dropped_segments: parsed.dropped_segments,
        },
    };

    if network.is_empty() {
        warn!("Walkway network is empty - every route will be degraded");
    } else {
        info!("Walkway network built: {}", network.network_info());
    }
    network
}

/// Builds the junction graph for a list of segments.
///
/// Endpoints are merged in segment order, so the first endpoint seen near a
/// location becomes that junction's canonical position.
pub fn build_walkway_graph(segments: &[Line<f64>], config: &NetworkConfig) -> WalkwayGraph {
    let mut graph = WalkwayGraph::new(config.merge_epsilon, config.key_precision);

    for segment in segments {
        let start = graph.merge_junction(segment.start);
        let end = graph.merge_junction(segment.end);
        if !graph.connect(start, end) {
            log::trace!("Segment {segment:?} adds no new walkway");
        }
    }

    graph
}
