//! In-memory graph operations: the core data structure and its algorithms.

pub mod builder;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;
pub mod weighted_graph;

pub use builder::GraphBuilder;
pub use traversal::{NodeVisitor, SearchOrder};
pub use weighted_graph::Graph;
