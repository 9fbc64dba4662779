//! Node implementation
//!
//! A node is only an identity plus its label. Algorithm bookkeeping
//! (distances, in-degrees, visited flags) never lives on the node.

use super::types::{Label, NodeId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Human-readable label, unique within the store
    pub label: Label,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<Label>) -> Self {
        Node {
            id,
            label: label.into(),
        }
    }
}
