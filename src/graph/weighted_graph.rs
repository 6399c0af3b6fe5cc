//! Core graph structure: a node arena with a name index.

use std::collections::HashMap;

use crate::types::{GraphError, GraphResult, Node, NodeId, Weight};

/// An in-memory weighted graph.
///
/// The graph owns every node in an arena addressed by [`NodeId`]; edges are
/// handle-to-weight entries on the source node, so nodes never own each
/// other. Nodes are created on first lookup by name and are never removed.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All nodes, indexed by handle.
    nodes: Vec<Node>,
    /// Name index: name -> handle.
    index: HashMap<String, NodeId>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Return the handle of the node called `name`, creating a node with no
    /// edges if none exists yet.
    pub fn get_or_create_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, name));
        self.index.insert(name.to_owned(), id);
        id
    }

    /// True if a node called `name` exists.
    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Handle of the node called `name`, without creating it.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Get a node by handle (immutable).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a node by name.
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.node_id(name).and_then(|id| self.node(id))
    }

    /// All nodes, in creation order.
    pub fn all_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges. An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum()
    }

    /// Every directed edge as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.nodes
            .iter()
            .flat_map(|node| node.edges().map(move |(to, w)| (node.id(), to, w)))
    }

    /// Total weight of the graph when read as undirected.
    ///
    /// Each edge pair is counted once; a directed edge without its reverse
    /// is counted on its own. The sum saturates instead of overflowing.
    pub fn undirected_weight(&self) -> Weight {
        self.edges()
            .filter(|&(from, to, _)| from <= to || !self.has_edge(to, from))
            .fold(0, |total: Weight, (_, _, w)| total.saturating_add(w))
    }

    /// Add a directed edge, overwriting any previous weight.
    pub fn add_directed_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: Weight,
    ) -> GraphResult<()> {
        self.require(from)?;
        self.require(to)?;
        self.nodes[from.0].add_directed_edge(to, weight);
        Ok(())
    }

    /// Add an undirected edge: a directed edge each way with the same weight.
    pub fn add_undirected_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        weight: Weight,
    ) -> GraphResult<()> {
        self.require(a)?;
        self.require(b)?;
        self.nodes[a.0].add_directed_edge(b, weight);
        self.nodes[b.0].add_directed_edge(a, weight);
        Ok(())
    }

    /// Add a directed edge between two nodes named `from` and `to`, creating
    /// either node if needed.
    pub fn add_directed_edge_by_name(
        &mut self,
        from: &str,
        to: &str,
        weight: Weight,
    ) -> (NodeId, NodeId) {
        let from = self.get_or_create_node(from);
        let to = self.get_or_create_node(to);
        self.nodes[from.0].add_directed_edge(to, weight);
        (from, to)
    }

    /// Add an undirected edge between two nodes named `a` and `b`, creating
    /// either node if needed.
    pub fn add_undirected_edge_by_name(
        &mut self,
        a: &str,
        b: &str,
        weight: Weight,
    ) -> (NodeId, NodeId) {
        let (a, b) = self.add_directed_edge_by_name(a, b, weight);
        self.nodes[b.0].add_directed_edge(a, weight);
        (a, b)
    }

    /// Remove the directed edge `from -> to`, returning its weight.
    pub fn remove_directed_edge(&mut self, from: NodeId, to: NodeId) -> GraphResult<Weight> {
        let weight = self.weight(from, to)?;
        self.nodes[from.0].remove_directed_edge(to);
        Ok(weight)
    }

    /// Remove both halves of the undirected edge `a <-> b`.
    ///
    /// Both directions are checked before either is removed, so a missing
    /// half leaves the graph unchanged. Returns the weight of `a -> b`.
    pub fn remove_undirected_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<Weight> {
        let weight = self.weight(a, b)?;
        self.weight(b, a)?;
        self.nodes[a.0].remove_directed_edge(b);
        self.nodes[b.0].remove_directed_edge(a);
        Ok(weight)
    }

    /// True if the edge `from -> to` exists.
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.node(from).is_some_and(|node| node.has_edge(to))
    }

    /// Weight of the edge `from -> to`.
    pub fn weight(&self, from: NodeId, to: NodeId) -> GraphResult<Weight> {
        self.require(from)?.weight(self.require(to)?)
    }

    fn require(&self, id: NodeId) -> GraphResult<&Node> {
        self.node(id).ok_or(GraphError::UnknownNode(id))
    }
}
