//! Graph topology analysis algorithms
//!
//! Topological ordering with Kahn's algorithm.

use super::common::{GraphView, NodeId};
use tracing::debug;

/// Topological ordering (Kahn's algorithm)
///
/// Zero in-degree vertices seed the worklist in vertex order; the worklist is
/// walked by index and successors are appended as their in-degree drops to
/// zero. Every edge `u -> v` places `u` before `v`.
///
/// A cyclic graph is not an error: vertices on or behind a cycle are left out,
/// so the result is shorter than `view.node_count`. Compare the lengths (or
/// use [`is_acyclic`]) to detect it.
pub fn topological_ordering(view: &GraphView) -> Vec<NodeId> {
    let n = view.node_count;
    let mut in_degree: Vec<usize> = (0..n).map(|idx| view.in_degree(idx)).collect();
    let mut order: Vec<usize> = (0..n).filter(|&idx| in_degree[idx] == 0).collect();

    let mut head = 0;
    while head < order.len() {
        let current = order[head];
        head += 1;

        for &next in view.successors(current) {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                order.push(next);
            }
        }
    }

    if order.len() < n {
        debug!(
            "Topological ordering incomplete: {} of {} vertices ordered, graph has a cycle",
            order.len(),
            n
        );
    }

    order.into_iter().map(|idx| view.index_to_node[idx]).collect()
}

/// Whether the directed graph has no cycle.
pub fn is_acyclic(view: &GraphView) -> bool {
    topological_ordering(view).len() == view.node_count
}
