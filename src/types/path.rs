//! Candidate paths for the priority-queue driven algorithms.

use std::cmp::Ordering;

use super::{NodeId, Weight};

/// A candidate path ending at `dest` with cumulative (or edge) `cost`.
///
/// `Ord` is reversed so that a [`BinaryHeap`](std::collections::BinaryHeap)
/// of paths pops the cheapest first. Equal costs fall back to the lower
/// destination handle, then the lower start handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Path {
    /// Where the final edge starts; `None` for a search seed.
    pub start: Option<NodeId>,
    /// Where the path ends.
    pub dest: NodeId,
    /// Cost of the path.
    pub cost: Weight,
}

impl Path {
    /// A seed path with no originating edge.
    pub fn seed(dest: NodeId, cost: Weight) -> Self {
        Self {
            start: None,
            dest,
            cost,
        }
    }

    /// A path whose last edge runs from `start` to `dest`.
    pub fn edge(start: NodeId, dest: NodeId, cost: Weight) -> Self {
        Self {
            start: Some(start),
            dest,
            cost,
        }
    }
}

impl Ord for Path {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.dest.cmp(&self.dest))
            .then_with(|| other.start.cmp(&self.start))
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with cost {}", self.dest, self.cost)
    }
}
