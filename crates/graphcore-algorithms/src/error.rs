//! Error types for the algorithm crate

use crate::common::NodeId;
use thiserror::Error;

/// Errors raised when an algorithm input is malformed.
///
/// Unreachability is never an error: it is reported through
/// [`Distance::INFINITY`](crate::Distance::INFINITY) or a short ordering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    #[error("Node {0} is not part of the graph view")]
    UnknownNode(NodeId),

    #[error("Vertex index {index} out of range for {vertex_count} vertices")]
    VertexOutOfRange { index: usize, vertex_count: usize },

    #[error("Node {0} has more than one successor")]
    MultipleSuccessors(NodeId),
}

pub type AlgoResult<T> = Result<T, AlgoError>;
