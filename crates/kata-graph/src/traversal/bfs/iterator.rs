//! BFS Iterator for lazy traversal.

use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::traversal::tree::{NodeId, Tree};
use crate::traversal::types::{Frontier, TraversalParams, Visit};

/// Lazy breadth-first (level order) traversal.
///
/// The queue is a growing `Vec` with an advancing read cursor: children
/// are appended to the tail and the cursor moves forward one entry per
/// dequeue. Entries whose node was already visited are skipped, so each
/// node surfaces at most once even when the graph has cycles.
pub struct BreadthFirst<'a, T> {
    tree: &'a Tree<T>,
    queue: Vec<Frontier>,
    cursor: usize,
    visited: HashSet<NodeId>,
    params: TraversalParams,
    truncated: bool,
}

impl<'a, T> BreadthFirst<'a, T> {
    /// Create a new BFS iterator. `root` must belong to `tree`.
    pub(crate) fn new(tree: &'a Tree<T>, root: NodeId, params: TraversalParams) -> Self {
        Self {
            tree,
            queue: vec![(root, 0, None)],
            cursor: 0,
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

impl<'a, T> Iterator for BreadthFirst<'a, T> {
    type Item = Visit<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.params.exhausted(self.visited.len()) {
                let visited = &self.visited;
                self.truncated |= self.queue[self.cursor.min(self.queue.len())..]
                    .iter()
                    .any(|(id, ..)| !visited.contains(id));
                self.queue.clear();
                self.cursor = 0;
                return None;
            }

            let &(current, depth, parent) = self.queue.get(self.cursor)?;
            self.cursor += 1;

            let Some(node) = self.tree.node(current) else {
                continue;
            };

            if !self.visited.insert(current) {
                continue;
            }

            if self.params.expands(depth) {
                for &child in &node.children {
                    if !self.visited.contains(&child) {
                        self.queue.push((child, depth + 1, Some(current)));
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

impl<T> FusedIterator for BreadthFirst<'_, T> {}
