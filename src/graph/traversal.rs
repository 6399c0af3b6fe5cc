//! Graph traversal algorithms (BFS, DFS).

use std::collections::{HashSet, VecDeque};

use log::{debug, trace};

use crate::types::{Node, NodeId};

use super::Graph;

/// Order in which a search expands the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrder {
    /// FIFO frontier, layer by layer.
    BreadthFirst,
    /// LIFO frontier, deepest first.
    DepthFirst,
}

/// Callback invoked once per node the first time a search reaches it.
///
/// Implemented for every `FnMut(&Node)`, so a closure can be passed directly.
pub trait NodeVisitor {
    /// Called with each newly visited node.
    fn visit(&mut self, node: &Node);
}

impl<F: FnMut(&Node)> NodeVisitor for F {
    fn visit(&mut self, node: &Node) {
        self(node)
    }
}

/// Pending nodes of a search. A queue for BFS, a stack for DFS.
struct Frontier {
    order: SearchOrder,
    pending: VecDeque<NodeId>,
}

impl Frontier {
    fn new(order: SearchOrder, start: NodeId) -> Self {
        Self {
            order,
            pending: VecDeque::from([start]),
        }
    }

    fn push(&mut self, id: NodeId) {
        self.pending.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        match self.order {
            SearchOrder::BreadthFirst => self.pending.pop_front(),
            SearchOrder::DepthFirst => self.pending.pop_back(),
        }
    }
}

impl Graph {
    /// Breadth-first search from the node called `start_name`, creating it if
    /// absent. `visitor` is called once for every reachable node.
    pub fn breadth_first_search<V: NodeVisitor>(&mut self, start_name: &str, visitor: V) {
        self.search(start_name, SearchOrder::BreadthFirst, visitor);
    }

    /// Depth-first search from the node called `start_name`, creating it if
    /// absent. `visitor` is called once for every reachable node.
    ///
    /// Neighbors are pushed in ascending handle order, so the most recently
    /// created neighbor is explored first.
    pub fn depth_first_search<V: NodeVisitor>(&mut self, start_name: &str, visitor: V) {
        self.search(start_name, SearchOrder::DepthFirst, visitor);
    }

    /// Search from `start_name` in the given order.
    ///
    /// A node may sit in the frontier several times; it is visited only the
    /// first time it is popped.
    pub fn search<V: NodeVisitor>(&mut self, start_name: &str, order: SearchOrder, mut visitor: V) {
        let start = self.get_or_create_node(start_name);
        debug!("{:?} search from '{}' ({})", order, start_name, start);

        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut frontier = Frontier::new(order, start);

        while let Some(current) = frontier.pop() {
            if visited.contains(&current) {
                continue;
            }
            let Some(node) = self.node(current) else {
                continue;
            };
            trace!("visit '{}'", node.name());
            visitor.visit(node);
            visited.insert(current);

            for neighbor in node.neighbors() {
                if !visited.contains(&neighbor) {
                    frontier.push(neighbor);
                }
            }
        }

        debug!("{:?} search visited {} nodes", order, visited.len());
    }

    /// Handles of every node reachable from `start_name`, in visit order.
    pub fn visit_order(&mut self, start_name: &str, order: SearchOrder) -> Vec<NodeId> {
        let mut visited = Vec::new();
        self.search(start_name, order, |node: &Node| visited.push(node.id()));
        visited
    }
}
