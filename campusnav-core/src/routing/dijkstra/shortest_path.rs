use std::collections::BinaryHeap;

use hashbrown::{HashMap, HashSet, hash_map::Entry};
use petgraph::graph::NodeIndex;

use super::state::State;
use crate::model::WalkwayGraph;

/// Junction sequence of a shortest walk, both ends included
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    /// Sum of walkway lengths along `nodes`
    pub length: f64,
}

/// Dijkstra's algorithm between two junctions.
///
/// Stops as soon as `end` is settled. Returns `None` when `end` cannot be
/// reached from `start` or either node is not in the graph.
pub fn shortest_path(
    graph: &WalkwayGraph,
    start: NodeIndex,
    end: NodeIndex,
) -> Option<ShortestPath> {
    graph.junction(start)?;
    graph.junction(end)?;

    let estimated_nodes = graph.node_count();
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut settled: HashSet<NodeIndex> = HashSet::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes);

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // Stale heap entry, a shorter path was already settled
        if !settled.insert(node) {
            continue;
        }

        if node == end {
            return Some(ShortestPath {
                nodes: trace_back(&predecessors, start, end),
                length: cost,
            });
        }

        for (next, length) in graph.neighbors(node) {
            if settled.contains(&next) {
                continue;
            }
            let next_cost = cost + length;

            match distances.entry(next) {
                Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                }
                Entry::Occupied(mut entry) => {
                    if next_cost >= *entry.get() {
                        continue;
                    }
                    *entry.get_mut() = next_cost;
                }
            }
            predecessors.insert(next, node);
            heap.push(State {
                cost: next_cost,
                node: next,
            });
        }
    }

    log::debug!("No walkway path between {start:?} and {end:?}");
    None
}

/// Follows predecessors from `end` back to `start`
fn trace_back(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    end: NodeIndex,
) -> Vec<NodeIndex> {
    let mut nodes = vec![end];
    let mut current = end;
    while current != start {
        match predecessors.get(&current) {
            Some(&prev) => {
                nodes.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    nodes.reverse();
    nodes
}
