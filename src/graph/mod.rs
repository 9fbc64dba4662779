//! Graph store
//!
//! Labelled nodes and weighted, optionally directed edges. Algorithms read the
//! store through the dense view built in [`crate::algo`].

pub mod edge;
pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use node::Node;
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{EdgeId, Label, NodeId};
