//! JSON graph documents
//!
//! ```json
//! {
//!   "directed": true,
//!   "nodes": ["S", "A", "B"],
//!   "edges": [
//!     { "source": "S", "target": "A", "weight": 4 },
//!     { "source": "S", "target": "B", "weight": 1 },
//!     { "source": "B", "target": "A" }
//!   ]
//! }
//! ```
//!
//! When `nodes` is present every edge endpoint must be listed there; when it
//! is omitted, endpoints are admitted in order of first appearance.

use crate::graph::{GraphError, GraphStore};
use graphcore_algorithms::Weight;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid graph document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Edge endpoint '{0}' is not listed in nodes")]
    UndeclaredNode(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

fn default_directed() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<String>>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let document = Self::from_json_str(&text)?;
        info!(
            "Loaded graph document {:?}: {} edges",
            path,
            document.edges.len()
        );
        Ok(document)
    }

    /// Build a store; edges without a weight get `default_weight`.
    pub fn to_store(&self, default_weight: Weight) -> Result<GraphStore, DocumentError> {
        let mut store = GraphStore::with_direction(self.directed);

        if let Some(nodes) = &self.nodes {
            for label in nodes {
                store.create_node(label.as_str())?;
            }
        }

        for record in &self.edges {
            let weight = record.weight.unwrap_or(default_weight);
            if self.nodes.is_some() {
                let source = store
                    .node_by_label(&record.source)
                    .ok_or_else(|| DocumentError::UndeclaredNode(record.source.clone()))?;
                let target = store
                    .node_by_label(&record.target)
                    .ok_or_else(|| DocumentError::UndeclaredNode(record.target.clone()))?;
                store.create_edge(source, target, weight)?;
            } else {
                store.connect(record.source.as_str(), record.target.as_str(), weight)?;
            }
        }

        Ok(store)
    }

    /// Snapshot a store as a document (nodes always listed)
    pub fn from_store(store: &GraphStore) -> Self {
        let label = |id| {
            store
                .label_of(id)
                .map(|l| l.as_str().to_string())
                .unwrap_or_default()
        };

        GraphDocument {
            directed: store.is_directed(),
            nodes: Some(store.all_nodes().map(|n| n.label.as_str().to_string()).collect()),
            edges: store
                .all_edges()
                .map(|e| EdgeRecord {
                    source: label(e.source),
                    target: label(e.target),
                    weight: Some(e.weight),
                })
                .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
