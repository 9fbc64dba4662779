//! Minimum Spanning Tree algorithms
//!
//! Implements Kruskal's algorithm over a disjoint-set forest.

use super::common::{GraphView, NodeId, Weight, WeightedEdge};
use super::union_find::DisjointSet;
use tracing::{debug, warn};

/// Edges of a minimum spanning forest, in the order they were accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MstResult {
    /// Sum of the accepted weights, clamped to the `Weight` range.
    pub total_weight: Weight,
    /// The exact sum did not fit in `Weight`; `total_weight` is clamped.
    pub total_saturated: bool,
    pub edges: Vec<WeightedEdge>,
}

impl MstResult {
    pub fn contains(&self, edge: &WeightedEdge) -> bool {
        self.edges.contains(edge)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Kruskal's Algorithm for Minimum Spanning Tree
///
/// Edges are undirected and need not be sorted. The sort is stable, so among
/// equal weights the earlier input edge wins. A disconnected input yields a
/// spanning forest with `|V| - components` edges. Parallel edges are skipped
/// once a cheaper edge has joined their endpoints.
pub fn minimum_spanning_tree(edges: &[WeightedEdge]) -> MstResult {
    let mut sorted: Vec<&WeightedEdge> = edges.iter().collect();
    sorted.sort_by_key(|edge| edge.weight);

    let mut forest: DisjointSet<NodeId> = DisjointSet::with_capacity(edges.len());
    let mut mst_edges = Vec::new();
    let mut total_weight: Weight = 0;
    let mut total_saturated = false;

    for edge in sorted {
        if forest.union(edge.source, edge.target) {
            total_weight = match total_weight.checked_add(edge.weight) {
                Some(sum) => sum,
                None => {
                    total_saturated = true;
                    total_weight.saturating_add(edge.weight)
                }
            };
            mst_edges.push(*edge);
        }
    }

    if total_saturated {
        warn!("Kruskal total weight overflowed; reporting {}", total_weight);
    }

    debug!(
        "Kruskal accepted {} of {} edges over {} vertices ({} components)",
        mst_edges.len(),
        edges.len(),
        forest.len(),
        forest.set_count()
    );

    MstResult {
        total_weight,
        total_saturated,
        edges: mst_edges,
    }
}

/// Minimum spanning forest of a view, ignoring edge direction.
pub fn kruskal_mst(view: &GraphView) -> MstResult {
    let edges: Vec<WeightedEdge> = view.edges().collect();
    minimum_spanning_tree(&edges)
}
