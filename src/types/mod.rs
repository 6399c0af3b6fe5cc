//! All data types for the weighted-graph library.

pub mod error;
pub mod node;
pub mod path;

pub use error::{GraphError, GraphResult};
pub use node::Node;
pub use path::Path;

/// Edge weight. Algorithms assume weights are non-negative.
pub type Weight = i64;

/// Stable handle of a node inside the graph that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
