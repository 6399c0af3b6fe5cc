//! Error types for the weighted-graph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the weighted-graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No directed edge exists between the two named nodes.
    #[error("No edge from '{from}' to '{to}'")]
    NoSuchEdge { from: String, to: String },

    /// Handle is not registered in this graph.
    #[error("Node {0} is not part of this graph")]
    UnknownNode(NodeId),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
