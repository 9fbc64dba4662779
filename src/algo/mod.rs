//! Graph algorithms module
//!
//! Algorithms are implemented in the `graphcore-algorithms` crate.
//! This module provides the integration/adapter layer: it builds a dense
//! [`GraphView`] from a [`GraphStore`], validates what the algorithms take as
//! preconditions, and maps results back to store ids.
//!
//! Dense view indices equal store node ids, so [`DistanceMatrix`] rows and
//! columns are addressed by `NodeId::index()`.

use crate::config::GraphcoreConfig;
use crate::graph::{GraphError, GraphResult, GraphStore, NodeId};
use graphcore_algorithms::{GraphView, NodeId as AlgoNodeId, SuccessorChain, Weight, WeightedEdge};
use std::collections::HashMap;
use tracing::info;

// Re-export algorithm result types
pub use graphcore_algorithms::{
    BellmanFordResult, Distance, DistanceMatrix, MstResult, PathResult, WccResult,
};

/// Build a GraphView from the store for algorithm execution
///
/// An undirected edge becomes two arcs (one for a self-loop).
pub fn build_view(store: &GraphStore) -> GraphView {
    // 1. Index mappings (dense index == store id)
    let node_count = store.node_count();
    let mut index_to_node = Vec::with_capacity(node_count);
    let mut node_to_index = HashMap::with_capacity(node_count);

    for (idx, node) in store.all_nodes().enumerate() {
        index_to_node.push(node.id.as_u64());
        node_to_index.insert(node.id.as_u64(), idx);
    }

    // 2. Adjacency lists
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut weights: Vec<Vec<Weight>> = vec![Vec::new(); node_count];

    for edge in store.all_edges() {
        let u = edge.source.index();
        let v = edge.target.index();

        outgoing[u].push(v);
        incoming[v].push(u);
        weights[u].push(edge.weight);

        if !store.is_directed() && u != v {
            outgoing[v].push(u);
            incoming[u].push(v);
            weights[v].push(edge.weight);
        }
    }

    // 3. Convert to CSR
    GraphView::from_adjacency_list(
        node_count,
        index_to_node,
        node_to_index,
        outgoing,
        incoming,
        Some(weights),
    )
}

/// The store's edges as arcs: undirected edges appear in both directions.
pub fn arcs(store: &GraphStore) -> Vec<WeightedEdge> {
    let mut arcs = Vec::with_capacity(store.edge_count());
    for edge in store.all_edges() {
        arcs.push(WeightedEdge::new(edge.source.as_u64(), edge.target.as_u64(), edge.weight));
        if !store.is_directed() && edge.source != edge.target {
            arcs.push(WeightedEdge::new(edge.target.as_u64(), edge.source.as_u64(), edge.weight));
        }
    }
    arcs
}

fn require_node(store: &GraphStore, id: NodeId) -> GraphResult<()> {
    if store.has_node(id) {
        Ok(())
    } else {
        Err(GraphError::NodeNotFound(id))
    }
}

fn require_non_negative(store: &GraphStore) -> GraphResult<()> {
    match store.all_edges().find(|edge| edge.weight < 0) {
        Some(edge) => Err(GraphError::NegativeWeight {
            edge: edge.id,
            weight: edge.weight,
        }),
        None => Ok(()),
    }
}

fn to_store_id(id: AlgoNodeId) -> NodeId {
    NodeId::new(id)
}

/// Minimum spanning forest (Kruskal), edge direction ignored
pub fn minimum_spanning_tree(store: &GraphStore) -> MstResult {
    let edges: Vec<WeightedEdge> = store
        .all_edges()
        .map(|e| WeightedEdge::new(e.source.as_u64(), e.target.as_u64(), e.weight))
        .collect();
    let result = graphcore_algorithms::minimum_spanning_tree(&edges);
    info!(
        "MST: {} edges, total weight {}",
        result.edges.len(),
        result.total_weight
    );
    result
}

/// Bellman-Ford from `source` with the negative-cycle report.
///
/// Every store node appears in the result; nodes without edges are unreached
/// unless they are the source.
pub fn bellman_ford(store: &GraphStore, source: NodeId) -> GraphResult<BellmanFordResult> {
    require_node(store, source)?;
    let mut result = graphcore_algorithms::bellman_ford(source.as_u64(), &arcs(store));
    for node in store.all_nodes() {
        result
            .distances
            .entry(node.id.as_u64())
            .or_insert(Distance::INFINITY);
    }
    Ok(result)
}

/// Single-source shortest distances (Bellman-Ford; negative weights allowed)
pub fn shortest_paths(store: &GraphStore, source: NodeId) -> GraphResult<HashMap<NodeId, Distance>> {
    let result = bellman_ford(store, source)?;
    Ok(result
        .distances
        .into_iter()
        .map(|(id, d)| (to_store_id(id), d))
        .collect())
}

/// Shortest path length from `source` to `goal` (Dijkstra).
///
/// Fails with [`GraphError::NegativeWeight`] if any edge is negative.
/// An unreachable goal yields [`Distance::INFINITY`].
pub fn shortest_path_length(store: &GraphStore, source: NodeId, goal: NodeId) -> GraphResult<Distance> {
    require_node(store, source)?;
    require_node(store, goal)?;
    require_non_negative(store)?;

    let view = build_view(store);
    Ok(graphcore_algorithms::shortest_path_dijkstra(
        &view,
        source.as_u64(),
        goal.as_u64(),
    ))
}

/// Shortest weighted path from `source` to `goal` (Dijkstra), if one exists
pub fn shortest_path(store: &GraphStore, source: NodeId, goal: NodeId) -> GraphResult<Option<PathResult>> {
    require_node(store, source)?;
    require_node(store, goal)?;
    require_non_negative(store)?;

    let view = build_view(store);
    Ok(graphcore_algorithms::dijkstra(&view, source.as_u64(), goal.as_u64()))
}

/// Fewest-hops path from `source` to `goal` (BFS), if one exists
pub fn unweighted_path(store: &GraphStore, source: NodeId, goal: NodeId) -> GraphResult<Option<PathResult>> {
    require_node(store, source)?;
    require_node(store, goal)?;

    let view = build_view(store);
    Ok(graphcore_algorithms::bfs(&view, source.as_u64(), goal.as_u64()))
}

/// Whether `goal` can be reached from `source` (DFS)
pub fn is_reachable(store: &GraphStore, source: NodeId, goal: NodeId) -> GraphResult<bool> {
    require_node(store, source)?;
    require_node(store, goal)?;

    let view = build_view(store);
    Ok(graphcore_algorithms::is_reachable(&view, source.as_u64(), goal.as_u64()))
}

/// All-pairs shortest distances (Floyd-Warshall).
///
/// Parallel edges keep their lightest weight. Refuses stores above
/// `config.floyd_warshall.max_vertices`.
pub fn all_pairs_shortest_paths(store: &GraphStore, config: &GraphcoreConfig) -> GraphResult<DistanceMatrix> {
    let vertex_count = store.node_count();
    let max = config.floyd_warshall.max_vertices;
    if vertex_count > max {
        return Err(GraphError::TooLargeForDense { vertex_count, max });
    }

    let mut edge_lengths: HashMap<(usize, usize), Weight> = HashMap::new();
    for arc in arcs(store) {
        edge_lengths
            .entry((arc.source as usize, arc.target as usize))
            .and_modify(|w| *w = (*w).min(arc.weight))
            .or_insert(arc.weight);
    }

    let matrix = graphcore_algorithms::floyd_warshall(
        vertex_count,
        &edge_lengths,
        &config.floyd_warshall_config(),
    )?;
    info!("All-pairs shortest paths computed for {} vertices", vertex_count);
    Ok(matrix)
}

/// Topological ordering (Kahn). Shorter than the node count iff the graph has a cycle.
pub fn topological_ordering(store: &GraphStore) -> Vec<NodeId> {
    let view = build_view(store);
    graphcore_algorithms::topological_ordering(&view)
        .into_iter()
        .map(to_store_id)
        .collect()
}

pub fn is_acyclic(store: &GraphStore) -> bool {
    topological_ordering(store).len() == store.node_count()
}

/// Tortoise-and-hare cycle check from `start`.
///
/// Every node must have at most one successor, otherwise the store is not a
/// successor chain and [`graphcore_algorithms::AlgoError::MultipleSuccessors`] is returned.
pub fn detect_cycle(store: &GraphStore, start: NodeId) -> GraphResult<bool> {
    require_node(store, start)?;
    let view = build_view(store);
    let chain = SuccessorChain::from_view(&view)?;
    Ok(graphcore_algorithms::detect_cycle(&chain, view.index_of(start.as_u64())))
}

/// Weakly connected components
pub fn connected_components(store: &GraphStore) -> WccResult {
    graphcore_algorithms::weakly_connected_components(&build_view(store))
}
