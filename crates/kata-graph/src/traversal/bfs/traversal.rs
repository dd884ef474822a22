//! Collected BFS traversal.

use crate::error::GraphResult;
use crate::traversal::result::TraversalResult;
use crate::traversal::tree::{NodeId, Tree};
use crate::traversal::types::TraversalParams;

use super::iterator::BreadthFirst;

/// Lazily traverse `tree` breadth-first from `root`, yielding every
/// reachable node exactly once in level order.
///
/// # Errors
/// `GraphError::NodeNotFound` if `root` is not in `tree`.
pub fn breadth_first<T>(tree: &Tree<T>, root: NodeId) -> GraphResult<BreadthFirst<'_, T>> {
    tree.breadth_first(root)
}

/// Perform BFS traversal from `root` and collect order, depths and parents.
///
/// Parents recorded here describe shortest (fewest-edge) paths from the root.
pub fn bfs_traverse<T>(
    tree: &Tree<T>,
    root: NodeId,
    params: TraversalParams,
) -> GraphResult<TraversalResult> {
    let mut iter = tree.breadth_first_with(root, params)?;
    let mut result = TraversalResult::new();

    for visit in iter.by_ref() {
        result.record(&visit);
    }
    result.truncated = iter.is_truncated();

    if result.truncated {
        log::debug!(
            "BFS truncated at {} nodes (limit: {:?})",
            result.node_count(),
            params.max_nodes
        );
    }
    log::debug!(
        "BFS complete: {} nodes, max_depth={}",
        result.node_count(),
        result.max_depth_reached()
    );

    Ok(result)
}

/// Node IDs grouped by depth, root level first.
pub fn bfs_levels<T>(tree: &Tree<T>, root: NodeId) -> GraphResult<Vec<Vec<NodeId>>> {
    let mut levels: Vec<Vec<NodeId>> = Vec::new();
    for visit in tree.breadth_first(root)? {
        if levels.len() <= visit.depth {
            levels.resize_with(visit.depth + 1, Vec::new);
        }
        levels[visit.depth].push(visit.id);
    }
    Ok(levels)
}
