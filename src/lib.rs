//! Graphcore
//!
//! Classic graph algorithms over a small labelled graph store: minimum
//! spanning forests, single-source, single-pair and all-pairs shortest paths,
//! topological ordering and successor-chain cycle detection.
//!
//! # Layout
//!
//! - `graphcore-algorithms`: the algorithms over a dense CSR [`GraphView`](graphcore_algorithms::GraphView)
//! - [`graph`]: the labelled store the facade reads from
//! - [`algo`]: builds views from a store, validates inputs, maps ids back
//! - [`document`] and [`config`]: JSON graph files and YAML settings
//!
//! ## Example Usage
//!
//! ```rust
//! use graphcore::graph::GraphStore;
//! use graphcore::{algo, Distance};
//!
//! let mut store = GraphStore::new();
//! store.connect("S", "A", 4).unwrap();
//! store.connect("S", "B", 1).unwrap();
//! store.connect("B", "A", 1).unwrap();
//!
//! let s = store.resolve("S").unwrap();
//! let a = store.resolve("A").unwrap();
//! assert_eq!(algo::shortest_path_length(&store, s, a).unwrap(), Distance::new(2));
//!
//! let order = algo::topological_ordering(&store);
//! assert_eq!(order.len(), 3);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod document;
pub mod graph;

// Re-export main types for convenience
pub use graph::{Edge, EdgeId, GraphError, GraphResult, GraphStore, Label, Node, NodeId};

pub use algo::{BellmanFordResult, Distance, DistanceMatrix, MstResult, PathResult, WccResult};

pub use config::{ConfigError, DenseConfig, GraphcoreConfig};

pub use document::{DocumentError, EdgeRecord, GraphDocument};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
