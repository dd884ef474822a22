//! Type definitions shared by the traversals.

use kata_core::TraversalConfig;

use super::tree::NodeId;

/// Parameters for DFS/BFS traversal.
///
/// The default is unlimited: every node reachable from the root is yielded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalParams {
    /// Maximum depth to expand (None = unlimited).
    /// Depth 0 is the root. Nodes at `max_depth` are yielded but their
    /// children are not explored.
    /// Depth is counted along the path that first discovered a node, so a
    /// shared node reached deeper by DFS keeps that deeper depth.
    pub max_depth: Option<usize>,

    /// Maximum number of nodes to yield (None = unlimited).
    pub max_nodes: Option<usize>,
}

impl TraversalParams {
    /// Builder: set max depth.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Builder: set max nodes.
    #[must_use]
    pub fn max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = Some(nodes);
        self
    }

    /// True if a node at `depth` may have its children explored.
    #[inline]
    pub(crate) fn expands(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }

    /// True once `yielded` nodes exhaust the node budget.
    #[inline]
    pub(crate) fn exhausted(&self, yielded: usize) -> bool {
        self.max_nodes.map_or(false, |max| yielded >= max)
    }
}

impl From<&TraversalConfig> for TraversalParams {
    fn from(config: &TraversalConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            max_nodes: config.max_nodes,
        }
    }
}

/// One node surfaced by a traversal.
#[derive(Debug)]
pub struct Visit<'a, T> {
    /// Handle of the visited node.
    pub id: NodeId,
    /// Distance from the root along the edge that discovered the node.
    pub depth: usize,
    /// Node the visit was reached from (None for the root).
    pub parent: Option<NodeId>,
    /// Borrowed payload.
    pub payload: &'a T,
}

impl<T> Clone for Visit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Visit<'_, T> {}

/// Frontier entry: (node, depth, parent).
pub(crate) type Frontier = (NodeId, usize, Option<NodeId>);
