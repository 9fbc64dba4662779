//! Pathfinding algorithms
//!
//! Breadth-first search (unweighted shortest path), depth-first reachability,
//! and Dijkstra (non-negative weighted shortest path with single-target early exit).

use super::common::{GraphView, NodeId, Weight};
use super::distance::Distance;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use tracing::debug;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    pub path: Vec<NodeId>,
    pub cost: Weight,
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Returns `None` when either node is unknown or the target is unreachable.
pub fn bfs(view: &GraphView, source: NodeId, target: NodeId) -> Option<PathResult> {
    let source_idx = view.index_of(source)?;
    let target_idx = view.index_of(target)?;

    let mut queue = VecDeque::new();
    let mut parent: Vec<Option<usize>> = vec![None; view.node_count];
    let mut seen = vec![false; view.node_count];

    queue.push_back(source_idx);
    seen[source_idx] = true;

    while let Some(current_idx) = queue.pop_front() {
        if current_idx == target_idx {
            let path = reconstruct_path(view, &parent, target_idx);
            return Some(PathResult {
                source,
                target,
                cost: (path.len() - 1) as Weight,
                path,
            });
        }

        for &next_idx in view.successors(current_idx) {
            if !seen[next_idx] {
                seen[next_idx] = true;
                parent[next_idx] = Some(current_idx);
                queue.push_back(next_idx);
            }
        }
    }

    None
}

/// Depth-first reachability check. A node always reaches itself.
pub fn is_reachable(view: &GraphView, source: NodeId, target: NodeId) -> bool {
    let (Some(source_idx), Some(target_idx)) = (view.index_of(source), view.index_of(target)) else {
        return false;
    };

    let mut visited = vec![false; view.node_count];
    let mut stack = vec![source_idx];

    while let Some(current_idx) = stack.pop() {
        if current_idx == target_idx {
            return true;
        }
        if visited[current_idx] {
            continue;
        }
        visited[current_idx] = true;

        // reversed so successors are explored in insertion order
        for &next_idx in view.successors(current_idx).iter().rev() {
            if !visited[next_idx] {
                stack.push(next_idx);
            }
        }
    }

    false
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq, Eq)]
struct State {
    cost: Distance,
    node_idx: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap; index breaks ties deterministically
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Uses edge weights from GraphView if available, otherwise assumes 1.
/// Edge weights must be non-negative; route graphs with negative weights to
/// Bellman-Ford instead.
pub fn dijkstra(view: &GraphView, source: NodeId, target: NodeId) -> Option<PathResult> {
    let source_idx = view.index_of(source)?;
    let target_idx = view.index_of(target)?;

    let (cost, parent) = search(view, source_idx, target_idx)?;
    let path = reconstruct_path(view, &parent, target_idx);
    Some(PathResult {
        source,
        target,
        path,
        cost: cost.value()?,
    })
}

/// Length of the shortest path from `source` to `goal`, or
/// [`Distance::INFINITY`] when the goal is unreachable or either node is unknown.
///
/// Precondition: every edge weight is non-negative.
pub fn shortest_path_dijkstra(view: &GraphView, source: NodeId, goal: NodeId) -> Distance {
    let (Some(source_idx), Some(goal_idx)) = (view.index_of(source), view.index_of(goal)) else {
        return Distance::INFINITY;
    };
    search(view, source_idx, goal_idx).map_or(Distance::INFINITY, |(cost, _)| cost)
}

/// Lazy-deletion Dijkstra: improved entries are pushed again and the
/// superseded ones are discarded when popped.
fn search(view: &GraphView, source_idx: usize, target_idx: usize) -> Option<(Distance, Vec<Option<usize>>)> {
    let mut best = vec![Distance::INFINITY; view.node_count];
    let mut finalized = vec![false; view.node_count];
    let mut parent: Vec<Option<usize>> = vec![None; view.node_count];
    let mut heap = BinaryHeap::new();
    let mut stale = 0usize;

    best[source_idx] = Distance::ZERO;
    heap.push(State { cost: Distance::ZERO, node_idx: source_idx });

    while let Some(State { cost, node_idx }) = heap.pop() {
        if finalized[node_idx] || cost > best[node_idx] {
            stale += 1;
            continue;
        }
        finalized[node_idx] = true;

        if node_idx == target_idx {
            debug!("Dijkstra reached target with cost {} ({} stale entries skipped)", cost, stale);
            return Some((cost, parent));
        }

        for (nth, &next_idx) in view.successors(node_idx).iter().enumerate() {
            if finalized[next_idx] {
                continue;
            }
            let weight = view.edge_weight(node_idx, nth);
            debug_assert!(weight >= 0, "Dijkstra requires non-negative weights, got {}", weight);

            let next_cost = cost.add_weight(weight);
            if next_cost < best[next_idx] {
                best[next_idx] = next_cost;
                parent[next_idx] = Some(node_idx);
                heap.push(State { cost: next_cost, node_idx: next_idx });
            }
        }
    }

    debug!("Dijkstra exhausted the frontier without reaching the target");
    None
}

fn reconstruct_path(view: &GraphView, parent: &[Option<usize>], target_idx: usize) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut curr = Some(target_idx);
    while let Some(idx) = curr {
        path.push(view.index_to_node[idx]);
        curr = parent[idx];
    }
    path.reverse();
    path
}
