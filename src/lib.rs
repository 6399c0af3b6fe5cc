//! weighted-graph: an in-memory weighted graph library.
//!
//! Nodes are named vertices with directed weighted edges; undirected edges are
//! a symmetric pair. A [`Graph`] owns its nodes and runs breadth-first and
//! depth-first search, Dijkstra's shortest paths and Prim-Jarnik's minimum
//! spanning tree.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder, NodeVisitor, SearchOrder};
pub use types::{GraphError, GraphResult, Node, NodeId, Path, Weight};
