//! Collected traversal result.

use std::collections::HashMap;

use super::tree::NodeId;
use super::types::Visit;

/// Result of a collected DFS or BFS traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalResult {
    /// Visited node IDs in traversal order.
    pub visited_order: Vec<NodeId>,

    /// Depth at which each node was visited.
    pub depths: HashMap<NodeId, usize>,

    /// Parent node for each visited node (root has None).
    pub parents: HashMap<NodeId, Option<NodeId>>,

    /// True if the node limit stopped the traversal with work remaining.
    pub truncated: bool,
}

impl TraversalResult {
    /// Create a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record<T>(&mut self, visit: &Visit<'_, T>) {
        self.visited_order.push(visit.id);
        self.depths.insert(visit.id, visit.depth);
        self.parents.insert(visit.id, visit.parent);
    }

    /// Reconstruct path from the root to target.
    ///
    /// Returns None if target was not visited.
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.parents.contains_key(&target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;

        while let Some(Some(parent)) = self.parents.get(&current) {
            path.push(*parent);
            current = *parent;
        }

        path.reverse();
        Some(path)
    }

    /// Get total node count.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.visited_order.len()
    }

    /// Get maximum depth reached.
    #[must_use]
    pub fn max_depth_reached(&self) -> usize {
        self.depths.values().copied().max().unwrap_or(0)
    }
}
