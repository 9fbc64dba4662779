//! Edge implementation
//!
//! Edges are immutable once created. In a directed store an edge goes
//! `source -> target`; in an undirected store it is traversable both ways.

use super::types::{EdgeId, NodeId};
use graphcore_algorithms::Weight;
use serde::{Deserialize, Serialize};

/// A weighted edge in the graph store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Source node (edge goes FROM this node)
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    pub target: NodeId,

    /// Integer weight (may be negative)
    pub weight: Weight,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId, weight: Weight) -> Self {
        Edge {
            id,
            source,
            target,
            weight,
        }
    }

    /// The endpoint opposite `node`, if `node` is an endpoint
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.source {
            Some(self.target)
        } else if node == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}
