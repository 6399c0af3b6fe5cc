//! Fluent API for building Graph instances.

use crate::types::Weight;

use super::Graph;

/// Fluent builder for constructing a [`Graph`] by node name.
///
/// Every name mentioned creates its node on first use, in the order the
/// names appear.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            graph: Graph::with_capacity(capacity),
        }
    }

    /// Add a node with no edges.
    pub fn node(mut self, name: &str) -> Self {
        self.graph.get_or_create_node(name);
        self
    }

    /// Add a directed edge.
    pub fn directed(mut self, from: &str, to: &str, weight: Weight) -> Self {
        self.graph.add_directed_edge_by_name(from, to, weight);
        self
    }

    /// Add an undirected edge.
    pub fn undirected(mut self, a: &str, b: &str, weight: Weight) -> Self {
        self.graph.add_undirected_edge_by_name(a, b, weight);
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph {
        self.graph
    }
}
