//! Minimum spanning tree construction (Prim-Jarnik).

use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::types::{NodeId, Path};

use super::Graph;

impl Graph {
    /// Build a minimum spanning tree as a new graph.
    ///
    /// The result holds a node of the same name for every node in `self`
    /// and an undirected edge for each tree edge. Growth starts from the
    /// first-created node and follows outgoing edges. When the frontier runs
    /// dry with nodes still unvisited, growth restarts from the oldest
    /// unvisited node, so a disconnected graph yields a spanning forest with
    /// one tree per component.
    pub fn prim_jarnik(&self) -> Graph {
        let total = self.node_count();
        let mut tree = Graph::with_capacity(total);
        let mut visited = vec![false; total];
        let mut visited_count = 0;
        let mut todo: BinaryHeap<Path> = BinaryHeap::new();
        let mut components = 0;

        while visited_count < total {
            let reached = match todo.pop() {
                Some(candidate) => {
                    let (Some(start), Some(false)) =
                        (candidate.start, visited.get(candidate.dest.0).copied())
                    else {
                        continue;
                    };
                    let (Some(from), Some(to)) = (self.node(start), self.node(candidate.dest))
                    else {
                        continue;
                    };
                    trace!("tree edge '{}' - '{}' at {}", from.name(), to.name(), candidate.cost);
                    tree.add_undirected_edge_by_name(from.name(), to.name(), candidate.cost);
                    candidate.dest
                }
                None => {
                    // Frontier exhausted: grow a new tree
                    let Some(index) = visited.iter().position(|&seen| !seen) else {
                        break;
                    };
                    components += 1;
                    let root = NodeId(index);
                    if components > 1 {
                        debug!("prim_jarnik: restarting at {} for component {}", root, components);
                    }
                    if let Some(node) = self.node(root) {
                        tree.get_or_create_node(node.name());
                    }
                    root
                }
            };

            visited[reached.0] = true;
            visited_count += 1;
            let Some(node) = self.node(reached) else {
                continue;
            };
            for (neighbor, weight) in node.edges() {
                if visited.get(neighbor.0) == Some(&false) {
                    todo.push(Path::edge(reached, neighbor, weight));
                }
            }
        }

        debug!(
            "prim_jarnik: {} nodes, {} tree edges, {} component(s)",
            tree.node_count(),
            tree.edge_count() / 2,
            components
        );
        tree
    }
}
