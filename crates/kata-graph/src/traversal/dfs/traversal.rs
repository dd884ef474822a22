//! Collected DFS traversal.
//!
//! ITERATIVE depth-first search (NO recursion) to avoid stack overflow
//! on deep trees.

use crate::error::GraphResult;
use crate::traversal::result::TraversalResult;
use crate::traversal::tree::{NodeId, Tree};
use crate::traversal::types::TraversalParams;

use super::iterator::DepthFirst;

/// Lazily traverse `tree` depth-first from `root`, yielding every
/// reachable node exactly once in pre-order.
///
/// # Errors
/// `GraphError::NodeNotFound` if `root` is not in `tree`.
///
/// # Example
///
/// ```
/// use kata_graph::traversal::{depth_first, Tree};
///
/// let mut tree = Tree::new();
/// let root = tree.add_node("root");
/// let a = tree.add_child(root, "a").unwrap();
/// tree.add_child(a, "a1").unwrap();
/// tree.add_child(root, "b").unwrap();
///
/// let order: Vec<&str> = depth_first(&tree, root).unwrap().map(|v| *v.payload).collect();
/// assert_eq!(order, vec!["root", "a", "a1", "b"]);
/// ```
pub fn depth_first<T>(tree: &Tree<T>, root: NodeId) -> GraphResult<DepthFirst<'_, T>> {
    tree.depth_first(root)
}

/// Perform DFS traversal from `root` and collect order, depths and parents.
///
/// # Arguments
/// * `tree` - Node arena
/// * `root` - Starting node
/// * `params` - Depth and node limits
///
/// # Returns
/// * `Ok(TraversalResult)` - Nodes in pre-order with depth/parent bookkeeping
/// * `Err(GraphError::NodeNotFound)` - `root` is not in `tree`
pub fn dfs_traverse<T>(
    tree: &Tree<T>,
    root: NodeId,
    params: TraversalParams,
) -> GraphResult<TraversalResult> {
    let mut iter = tree.depth_first_with(root, params)?;
    let mut result = TraversalResult::new();

    for visit in iter.by_ref() {
        result.record(&visit);
    }
    result.truncated = iter.is_truncated();

    if result.truncated {
        log::debug!(
            "DFS truncated at {} nodes (limit: {:?})",
            result.node_count(),
            params.max_nodes
        );
    }
    log::debug!(
        "DFS complete: {} nodes, max_depth={}",
        result.node_count(),
        result.max_depth_reached()
    );

    Ok(result)
}
