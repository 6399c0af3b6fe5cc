//! Single-source shortest paths (Dijkstra).

use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};

use crate::types::{NodeId, Path, Weight};

use super::Graph;

impl Graph {
    /// Cost of the cheapest path from the node called `start_name` to every
    /// node reachable from it. The start node is created if absent.
    ///
    /// The search stops once every node is finalized or the queue runs dry;
    /// unreachable nodes are left out of the result. Weights must be
    /// non-negative for the costs to be minimal. Path costs saturate instead
    /// of overflowing.
    pub fn dijkstra(&mut self, start_name: &str) -> HashMap<NodeId, Weight> {
        let start = self.get_or_create_node(start_name);
        debug!("dijkstra from '{}' ({})", start_name, start);

        let total = self.node_count();
        let mut result: HashMap<NodeId, Weight> = HashMap::with_capacity(total);
        let mut todo = BinaryHeap::new();
        todo.push(Path::seed(start, 0));

        while result.len() < total {
            let Some(next) = todo.pop() else {
                debug!(
                    "dijkstra from '{}': {} of {} nodes unreachable",
                    start_name,
                    total - result.len(),
                    total
                );
                break;
            };
            if result.contains_key(&next.dest) {
                continue;
            }
            let Some(node) = self.node(next.dest) else {
                continue;
            };
            trace!("finalize '{}' at {}", node.name(), next.cost);
            result.insert(next.dest, next.cost);

            for (neighbor, weight) in node.edges() {
                if !result.contains_key(&neighbor) {
                    todo.push(Path::edge(next.dest, neighbor, next.cost.saturating_add(weight)));
                }
            }
        }

        debug!("dijkstra finalized {} nodes", result.len());
        result
    }
}
