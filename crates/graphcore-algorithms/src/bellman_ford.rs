//! Bellman-Ford single-source shortest paths
//!
//! Tolerates negative edge weights. Runs `|V|` relaxation passes over the edge
//! list (one more than strictly needed), stopping early once a pass changes
//! nothing. A vertex whose distance is still [`Distance::INFINITY`] never
//! relaxes its outgoing edges.
//!
//! Negative cycles are not rejected: distances of vertices they reach are only
//! a lower bound after `|V|` passes. [`bellman_ford`] reports whether the last
//! pass still improved something, which only happens when such a cycle is
//! reachable from the source.

use super::common::{NodeId, WeightedEdge};
use super::distance::Distance;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Distances from a source, plus the negative-cycle hint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BellmanFordResult {
    pub source: NodeId,
    /// Every edge endpoint and the source. Unreached vertices map to the sentinel.
    pub distances: HashMap<NodeId, Distance>,
    /// The `|V|`-th pass still lowered a distance.
    pub negative_cycle_suspected: bool,
}

impl BellmanFordResult {
    pub fn distance(&self, node: NodeId) -> Distance {
        self.distances.get(&node).copied().unwrap_or(Distance::INFINITY)
    }
}

/// Bellman-Ford with the negative-cycle report.
pub fn bellman_ford(source: NodeId, edges: &[WeightedEdge]) -> BellmanFordResult {
    let mut distances: HashMap<NodeId, Distance> = HashMap::new();
    for edge in edges {
        distances.insert(edge.source, Distance::INFINITY);
        distances.insert(edge.target, Distance::INFINITY);
    }
    distances.insert(source, Distance::ZERO);

    let passes = distances.len();
    let mut last_pass_improved = false;

    for pass in 0..passes {
        let mut improved = false;

        for edge in edges {
            let from = distances.get(&edge.source).copied().unwrap_or(Distance::INFINITY);
            if from.is_infinite() {
                continue;
            }
            let candidate = from.add_weight(edge.weight);
            if let Some(to) = distances.get_mut(&edge.target) {
                if candidate < *to {
                    *to = candidate;
                    improved = true;
                }
            }
        }

        if !improved {
            debug!("Bellman-Ford converged after {} of {} passes", pass + 1, passes);
            break;
        }
        if pass + 1 == passes {
            last_pass_improved = true;
        }
    }

    if last_pass_improved {
        warn!("Bellman-Ford from {}: a negative cycle is reachable; distances are not final", source);
    }

    BellmanFordResult {
        source,
        distances,
        negative_cycle_suspected: last_pass_improved,
    }
}

/// Shortest distance from `source` to every vertex mentioned by `edges`.
pub fn shortest_paths_bellman_ford(source: NodeId, edges: &[WeightedEdge]) -> HashMap<NodeId, Distance> {
    bellman_ford(source, edges).distances
}
