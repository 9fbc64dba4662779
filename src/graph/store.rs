//! In-memory graph storage
//!
//! Nodes and edges live in arenas addressed by their ids; adjacency lists hold
//! edge ids, never references. Once built, a store is only read by algorithms.

use super::edge::Edge;
use super::node::Node;
use super::types::{EdgeId, Label, NodeId};
use graphcore_algorithms::{AlgoError, Weight, MAX_WEIGHT};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("No node labelled '{0}'")]
    UnknownLabel(String),

    #[error("A node labelled '{0}' already exists")]
    DuplicateLabel(Label),

    #[error("Invalid edge: source node {0} does not exist")]
    InvalidEdgeSource(NodeId),

    #[error("Invalid edge: target node {0} does not exist")]
    InvalidEdgeTarget(NodeId),

    #[error("Edge weight {weight} is outside the finite range -{max}..={max}")]
    WeightOutOfRange { weight: Weight, max: Weight },

    #[error("Edge {edge} has negative weight {weight}; use Bellman-Ford instead of Dijkstra")]
    NegativeWeight { edge: EdgeId, weight: Weight },

    #[error("{vertex_count} vertices exceed the dense all-pairs limit of {max}")]
    TooLargeForDense { vertex_count: usize, max: usize },

    #[error("Algorithm error: {0}")]
    Algorithm(#[from] AlgoError),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory graph storage
///
/// - nodes: NodeId -> Node (arena, id == index)
/// - edges: EdgeId -> Edge (arena, id == index)
/// - outgoing / incoming: NodeId -> Vec<EdgeId>, in insertion order
/// - label_index: Label -> NodeId, in creation order
#[derive(Debug, Clone)]
pub struct GraphStore {
    directed: bool,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
    label_index: IndexMap<Label, NodeId>,
}

impl GraphStore {
    /// Create an empty directed store
    pub fn new() -> Self {
        Self::with_direction(true)
    }

    /// Create an empty undirected store
    pub fn new_undirected() -> Self {
        Self::with_direction(false)
    }

    pub fn with_direction(directed: bool) -> Self {
        GraphStore {
            directed,
            nodes: Vec::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            label_index: IndexMap::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Create a node with a label that must not exist yet
    pub fn create_node(&mut self, label: impl Into<Label>) -> GraphResult<NodeId> {
        let label = label.into();
        if self.label_index.contains_key(&label) {
            return Err(GraphError::DuplicateLabel(label));
        }

        Ok(self.insert_node(label))
    }

    /// Return the node with this label, creating it if needed
    pub fn get_or_create_node(&mut self, label: impl Into<Label>) -> NodeId {
        let label = label.into();
        if let Some(&id) = self.label_index.get(&label) {
            return id;
        }

        self.insert_node(label)
    }

    fn insert_node(&mut self, label: Label) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u64);
        self.label_index.insert(label.clone(), id);
        self.nodes.push(Node::new(id, label));
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    /// Create a weighted edge between two existing nodes
    ///
    /// Weights must lie within `-MAX_WEIGHT..=MAX_WEIGHT`, the range in which
    /// a single edge is still a finite distance.
    pub fn create_edge(&mut self, source: NodeId, target: NodeId, weight: Weight) -> GraphResult<EdgeId> {
        if !self.has_node(source) {
            return Err(GraphError::InvalidEdgeSource(source));
        }
        if !self.has_node(target) {
            return Err(GraphError::InvalidEdgeTarget(target));
        }
        if !(-MAX_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(GraphError::WeightOutOfRange {
                weight,
                max: MAX_WEIGHT,
            });
        }

        let id = EdgeId::new(self.edges.len() as u64);
        self.edges.push(Edge::new(id, source, target, weight));
        self.outgoing[source.index()].push(id);
        self.incoming[target.index()].push(id);

        debug!("Created edge {} ({} -> {}, weight {})", id, source, target, weight);
        Ok(id)
    }

    /// Create an edge between two labelled nodes, creating the nodes as needed
    pub fn connect(
        &mut self,
        source: impl Into<Label>,
        target: impl Into<Label>,
        weight: Weight,
    ) -> GraphResult<EdgeId> {
        let source = self.get_or_create_node(source);
        let target = self.get_or_create_node(target);
        self.create_edge(source, target, weight)
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.as_u64() as usize)
    }

    pub fn node_by_label(&self, label: &str) -> Option<NodeId> {
        self.label_index.get(&Label::new(label)).copied()
    }

    /// Resolve a label, failing with [`GraphError::UnknownLabel`]
    pub fn resolve(&self, label: &str) -> GraphResult<NodeId> {
        self.node_by_label(label)
            .ok_or_else(|| GraphError::UnknownLabel(label.to_string()))
    }

    pub fn label_of(&self, id: NodeId) -> Option<&Label> {
        self.get_node(id).map(|node| &node.label)
    }

    /// All nodes in creation order
    pub fn all_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// All edges in creation order
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Edges leaving `id` in insertion order. In an undirected store this
    /// includes edges where `id` is the target; a self-loop appears once.
    pub fn get_outgoing_edges(&self, id: NodeId) -> Vec<&Edge> {
        let Some(out) = self.outgoing.get(id.index()) else {
            return Vec::new();
        };
        if self.directed {
            return out.iter().filter_map(|&e| self.get_edge(e)).collect();
        }

        // Both lists are ascending by edge id; merge them.
        let incoming: Vec<EdgeId> = self.incoming[id.index()]
            .iter()
            .copied()
            .filter(|&e| self.get_edge(e).is_some_and(|edge| edge.source != edge.target))
            .collect();
        let mut ids = Vec::with_capacity(out.len() + incoming.len());
        let (mut i, mut j) = (0, 0);
        while i < out.len() || j < incoming.len() {
            if j == incoming.len() || (i < out.len() && out[i] < incoming[j]) {
                ids.push(out[i]);
                i += 1;
            } else {
                ids.push(incoming[j]);
                j += 1;
            }
        }
        ids.into_iter().filter_map(|e| self.get_edge(e)).collect()
    }

    /// Successor nodes of `id` in insertion order
    pub fn successors(&self, id: NodeId) -> Vec<NodeId> {
        self.get_outgoing_edges(id)
            .into_iter()
            .filter_map(|edge| edge.other(id))
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_nodes_and_edges() {
        let mut store = GraphStore::new();
        let a = store.create_node("A").unwrap();
        let b = store.create_node("B").unwrap();
        let edge = store.create_edge(a, b, 7).unwrap();

        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 1);
        assert_eq!(store.get_edge(edge).unwrap().weight, 7);
        assert_eq!(store.successors(a), vec![b]);
        assert!(store.successors(b).is_empty());
        assert_eq!(store.label_of(b).unwrap().as_str(), "B");
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let mut store = GraphStore::new();
        store.create_node("A").unwrap();
        assert_eq!(
            store.create_node("A"),
            Err(GraphError::DuplicateLabel(Label::new("A")))
        );
        assert_eq!(store.get_or_create_node("A"), NodeId::new(0));
    }

    #[test]
    fn test_invalid_edge_endpoints() {
        let mut store = GraphStore::new();
        let a = store.create_node("A").unwrap();
        let ghost = NodeId::new(9);

        assert_eq!(store.create_edge(ghost, a, 1), Err(GraphError::InvalidEdgeSource(ghost)));
        assert_eq!(store.create_edge(a, ghost, 1), Err(GraphError::InvalidEdgeTarget(ghost)));
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_weight_outside_finite_range_rejected() {
        let mut store = GraphStore::new();
        let a = store.create_node("A").unwrap();
        let b = store.create_node("B").unwrap();

        assert!(store.create_edge(a, b, MAX_WEIGHT).is_ok());
        assert!(store.create_edge(a, b, -MAX_WEIGHT).is_ok());
        assert_eq!(
            store.create_edge(a, b, i64::MAX / 2),
            Err(GraphError::WeightOutOfRange { weight: i64::MAX / 2, max: MAX_WEIGHT })
        );
        assert!(matches!(
            store.create_edge(a, b, i64::MIN),
            Err(GraphError::WeightOutOfRange { .. })
        ));
        assert_eq!(store.edge_count(), 2);
    }

    #[test]
    fn test_resolve_labels() {
        let mut store = GraphStore::new();
        store.connect("x", "y", 2).unwrap();
        assert_eq!(store.resolve("y"), Ok(NodeId::new(1)));
        assert_eq!(store.resolve("z"), Err(GraphError::UnknownLabel("z".to_string())));
    }

    #[test]
    fn test_undirected_successors_include_reverse() {
        let mut store = GraphStore::new_undirected();
        store.connect("a", "b", 1).unwrap();
        store.connect("c", "a", 1).unwrap();
        store.connect("a", "a", 1).unwrap();

        let a = store.resolve("a").unwrap();
        let b = store.resolve("b").unwrap();
        let c = store.resolve("c").unwrap();
        assert_eq!(store.successors(a), vec![b, c, a]);
        assert_eq!(store.successors(b), vec![a]);
        assert_eq!(store.successors(c), vec![a]);
    }

    #[test]
    fn test_undirected_successors_follow_edge_creation_order() {
        let mut store = GraphStore::new_undirected();
        store.connect("a", "b", 1).unwrap();
        store.connect("c", "a", 1).unwrap();
        store.connect("a", "d", 1).unwrap();

        let a = store.resolve("a").unwrap();
        let labels: Vec<&str> = store
            .successors(a)
            .into_iter()
            .map(|n| store.label_of(n).unwrap().as_str())
            .collect();
        assert_eq!(labels, vec!["b", "c", "d"]);
    }
}
