//! A named vertex and its outgoing weighted edges.

use std::collections::BTreeMap;

use super::{GraphError, GraphResult, NodeId, Weight};

/// A single vertex of a graph.
///
/// A node stores only its outgoing edges, keyed by the handle of the target
/// node. An undirected edge is two directed edges of equal weight, one on
/// each endpoint. Edges are changed through [`Graph`](crate::Graph), which
/// only accepts targets registered in the same graph.
///
/// Neighbors iterate in ascending [`NodeId`] order, which is the order the
/// targets were created in their graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    name: String,
    neighbors: BTreeMap<NodeId, Weight>,
}

impl Node {
    /// Create a node with no edges.
    pub(crate) fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            neighbors: BTreeMap::new(),
        }
    }

    /// The node's name, unique within its graph.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node's handle in its graph.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Handles of every node this node has an edge to.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors.keys().copied()
    }

    /// Outgoing edges as `(target, weight)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.neighbors.iter().map(|(&target, &weight)| (target, weight))
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Insert the edge to `target`, overwriting any previous weight.
    ///
    /// Weights are not validated; negative weights break the shortest path
    /// and spanning tree guarantees.
    pub(crate) fn add_directed_edge(&mut self, target: NodeId, weight: Weight) {
        self.neighbors.insert(target, weight);
    }

    /// Remove the edge to `target`, returning its weight if it existed.
    pub(crate) fn remove_directed_edge(&mut self, target: NodeId) -> Option<Weight> {
        self.neighbors.remove(&target)
    }

    /// True if this node has an edge to `target`.
    pub fn has_edge(&self, target: NodeId) -> bool {
        self.neighbors.contains_key(&target)
    }

    /// Weight of the edge to `target`, if any.
    pub fn weight_to(&self, target: NodeId) -> Option<Weight> {
        self.neighbors.get(&target).copied()
    }

    /// Weight of the edge to `target`.
    pub fn weight(&self, target: &Node) -> GraphResult<Weight> {
        self.weight_to(target.id)
            .ok_or_else(|| GraphError::NoSuchEdge {
                from: self.name.clone(),
                to: target.name.clone(),
            })
    }
}
