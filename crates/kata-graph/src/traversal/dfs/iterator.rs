//! DFS Iterator for lazy traversal.
//!
//! Yields nodes one at a time without building the full result.

use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::traversal::tree::{NodeId, Tree};
use crate::traversal::types::{Frontier, TraversalParams, Visit};

/// Lazy depth-first (pre-order) traversal.
///
/// Explicit LIFO stack, no recursion. Children are pushed in reverse so
/// the first child is popped first. A node already visited in this call is
/// skipped when popped, so shared subtrees and back-edges surface each
/// node at most once.
///
/// Depth is measured along the discovery path. A node reachable from two
/// parents keeps the depth at which it was first popped, and the depth
/// limit applies to that path only: if that depth is the limit, its
/// children stay unexpanded even when a shallower route also exists.
pub struct DepthFirst<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<Frontier>,
    visited: HashSet<NodeId>,
    params: TraversalParams,
    truncated: bool,
}

impl<'a, T> DepthFirst<'a, T> {
    /// Create a new DFS iterator. `root` must belong to `tree`.
    pub(crate) fn new(tree: &'a Tree<T>, root: NodeId, params: TraversalParams) -> Self {
        Self {
            tree,
            stack: vec![(root, 0, None)],
            visited: HashSet::new(),
            params,
            truncated: false,
        }
    }

    /// Number of nodes yielded so far.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// True if the node limit ended the traversal while unvisited nodes remained.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl<'a, T> Iterator for DepthFirst<'a, T> {
    type Item = Visit<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.params.exhausted(self.visited.len()) {
                let visited = &self.visited;
                self.truncated |= self.stack.iter().any(|(id, ..)| !visited.contains(id));
                self.stack.clear();
                return None;
            }

            let (current, depth, parent) = self.stack.pop()?;

            let Some(node) = self.tree.node(current) else {
                continue;
            };

            // Skip if already visited (handles cycles and shared children)
            if !self.visited.insert(current) {
                continue;
            }

            if self.params.expands(depth) {
                for &child in node.children.iter().rev() {
                    if !self.visited.contains(&child) {
                        self.stack.push((child, depth + 1, Some(current)));
                    }
                }
            }

            return Some(Visit {
                id: current,
                depth,
                parent,
                payload: &node.payload,
            });
        }
    }
}

impl<T> FusedIterator for DepthFirst<'_, T> {}
