//! Shared graph model for the algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution.
//! Vertices are addressed by index into an arena; successor lists hold indices,
//! never references, so a view can be shared by any number of algorithm runs.

use crate::error::{AlgoError, AlgoResult};
use std::collections::HashMap;

/// Node Identifier type (u64). Two vertices are the same iff their ids are equal.
pub type NodeId = u64;

/// Integer edge weight. May be negative for Bellman-Ford and Floyd-Warshall.
///
/// Magnitudes above [`MAX_WEIGHT`] are not representable as a finite
/// [`Distance`](crate::Distance) and read as unreached.
pub type Weight = i64;

/// Largest finite path length, one below the `Distance::INFINITY` sentinel.
pub const MAX_WEIGHT: Weight = i64::MAX / 2 - 1;

/// An immutable weighted edge.
///
/// Directed algorithms read it as `source -> target`; the spanning tree
/// treats it as undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(source: NodeId, target: NodeId, weight: Weight) -> Self {
        WeightedEdge { source, target, weight }
    }
}

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,

    /// Edge weights: aligned with `out_targets`. `None` means every edge weighs 1.
    pub weights: Option<Vec<Weight>>,
}

impl GraphView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node, in insertion order
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Get weights for outgoing edges of a node
    pub fn weights(&self, idx: usize) -> Option<&[Weight]> {
        self.weights.as_ref().map(|w| {
            let start = self.out_offsets[idx];
            let end = self.out_offsets[idx + 1];
            &w[start..end]
        })
    }

    /// Weight of the `nth` outgoing edge of a node
    pub fn edge_weight(&self, idx: usize, nth: usize) -> Weight {
        self.weights(idx).map_or(1, |w| w[nth])
    }

    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.node_to_index.get(&node).copied()
    }

    pub fn node_at(&self, idx: usize) -> NodeId {
        self.index_to_node[idx]
    }

    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }

    /// All edges in CSR order (grouped by source, insertion order within a source)
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        (0..self.node_count).flat_map(move |u| {
            self.successors(u).iter().enumerate().map(move |(nth, &v)| {
                WeightedEdge::new(self.index_to_node[u], self.index_to_node[v], self.edge_weight(u, nth))
            })
        })
    }

    /// Build a weighted view from declared nodes and directed edges.
    ///
    /// Vertex iteration order is the order of `nodes`. Every edge endpoint
    /// must be declared, otherwise [`AlgoError::UnknownNode`] is returned.
    /// Duplicate entries in `nodes` collapse onto their first occurrence.
    pub fn from_edges(nodes: &[NodeId], edges: &[WeightedEdge]) -> AlgoResult<Self> {
        let mut index_to_node = Vec::with_capacity(nodes.len());
        let mut node_to_index = HashMap::with_capacity(nodes.len());
        for &node in nodes {
            if !node_to_index.contains_key(&node) {
                node_to_index.insert(node, index_to_node.len());
                index_to_node.push(node);
            }
        }

        let node_count = index_to_node.len();
        let mut outgoing = vec![Vec::new(); node_count];
        let mut incoming = vec![Vec::new(); node_count];
        let mut weights = vec![Vec::new(); node_count];

        for edge in edges {
            let u = *node_to_index
                .get(&edge.source)
                .ok_or(AlgoError::UnknownNode(edge.source))?;
            let v = *node_to_index
                .get(&edge.target)
                .ok_or(AlgoError::UnknownNode(edge.target))?;
            outgoing[u].push(v);
            incoming[v].push(u);
            weights[u].push(edge.weight);
        }

        Ok(Self::from_adjacency_list(
            node_count,
            index_to_node,
            node_to_index,
            outgoing,
            incoming,
            Some(weights),
        ))
    }

    /// Build a weighted view whose vertex set is every edge endpoint, in
    /// first-appearance order.
    pub fn from_edge_list(edges: &[WeightedEdge]) -> Self {
        let mut index_to_node = Vec::new();
        let mut node_to_index = HashMap::new();
        let mut outgoing: Vec<Vec<usize>> = Vec::new();
        let mut incoming: Vec<Vec<usize>> = Vec::new();
        let mut weights: Vec<Vec<Weight>> = Vec::new();

        for edge in edges {
            let u = intern(edge.source, &mut index_to_node, &mut node_to_index);
            let v = intern(edge.target, &mut index_to_node, &mut node_to_index);
            outgoing.resize_with(index_to_node.len(), Vec::new);
            incoming.resize_with(index_to_node.len(), Vec::new);
            weights.resize_with(index_to_node.len(), Vec::new);

            outgoing[u].push(v);
            incoming[v].push(u);
            weights[u].push(edge.weight);
        }

        Self::from_adjacency_list(
            index_to_node.len(),
            index_to_node,
            node_to_index,
            outgoing,
            incoming,
            Some(weights),
        )
    }

    /// Helper to create GraphView from adjacency lists
    pub fn from_adjacency_list(
        node_count: usize,
        index_to_node: Vec<NodeId>,
        node_to_index: HashMap<NodeId, usize>,
        outgoing: Vec<Vec<usize>>,
        incoming: Vec<Vec<usize>>,
        weights: Option<Vec<Vec<Weight>>>,
    ) -> Self {
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_sources = Vec::new();
        let mut flat_weights = if weights.is_some() { Some(Vec::new()) } else { None };

        out_offsets.push(0);
        for (i, neighbors) in outgoing.into_iter().enumerate() {
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());

            if let Some(ref mut w_flat) = flat_weights {
                if let Some(w_row) = weights.as_ref().map(|w| &w[i]) {
                    w_flat.extend(w_row.iter());
                }
            }
        }

        in_offsets.push(0);
        for sources in incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
            weights: flat_weights,
        }
    }
}

fn intern(
    node: NodeId,
    index_to_node: &mut Vec<NodeId>,
    node_to_index: &mut HashMap<NodeId, usize>,
) -> usize {
    *node_to_index.entry(node).or_insert_with(|| {
        index_to_node.push(node);
        index_to_node.len() - 1
    })
}
