//! Connected components
//!
//! Weakly connected components over the disjoint-set forest. Kruskal's
//! spanning forest has exactly `|V| - component_count` edges.

use super::common::{GraphView, NodeId, WeightedEdge};
use super::union_find::DisjointSet;
use std::collections::HashMap;

/// Result of WCC algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WccResult {
    /// Map of Component ID -> List of NodeIds
    pub components: HashMap<usize, Vec<NodeId>>,
    /// Map of NodeId -> Component ID
    pub node_component: HashMap<NodeId, usize>,
}

impl WccResult {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

/// Weakly Connected Components (WCC)
///
/// Finds all disjoint subgraphs in the graph.
/// Ignores edge direction. Component ids are the dense index of a member.
pub fn weakly_connected_components(view: &GraphView) -> WccResult {
    let n = view.node_count;
    let mut forest: DisjointSet<usize> = DisjointSet::with_capacity(n);

    for u_idx in 0..n {
        forest.make_set(u_idx);
        for &v_idx in view.successors(u_idx) {
            forest.union(u_idx, v_idx);
        }
    }

    let mut components = HashMap::new();
    let mut node_component = HashMap::new();

    for i in 0..n {
        let root = forest.find(i);
        let node_id = view.index_to_node[i];

        components.entry(root).or_insert_with(Vec::new).push(node_id);
        node_component.insert(node_id, root);
    }

    WccResult {
        components,
        node_component,
    }
}

/// Number of connected components among the endpoints of `edges`.
pub fn component_count(edges: &[WeightedEdge]) -> usize {
    let mut forest: DisjointSet<NodeId> = DisjointSet::with_capacity(edges.len());
    for edge in edges {
        forest.union(edge.source, edge.target);
    }
    forest.set_count()
}
