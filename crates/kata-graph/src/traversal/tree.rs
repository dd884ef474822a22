//! Arena-backed node graph with ordered children.
//!
//! Nodes are addressed by [`NodeId`] handles into the arena. A node's
//! children are an ordered list of handles, so a node may be linked under
//! several parents or point back at an ancestor. Traversals tolerate both
//! by tracking visited handles per call; the tree itself is never marked.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

use super::bfs::BreadthFirst;
use super::dfs::DepthFirst;
use super::types::TraversalParams;

/// Node handle (index into the arena).
pub type NodeId = usize;

/// A single vertex: opaque payload plus ordered child handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub payload: T,
    pub children: Vec<NodeId>,
}

/// Arena of nodes. The caller owns the arena; traversals only borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    nodes: Vec<TreeNode<T>>,
}

/// Nested, serde-friendly representation of a tree.
///
/// A missing `children` field deserializes as a leaf.
///
/// ```
/// use kata_graph::traversal::{NestedNode, Tree};
///
/// let nested: NestedNode<u32> = serde_json::from_str(
///     r#"{ "value": 1, "children": [ { "value": 2 }, { "value": 3 } ] }"#,
/// ).unwrap();
/// let (tree, root) = Tree::from_nested(nested);
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.children(root).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedNode<T> {
    pub value: T,
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NestedNode<T>>,
}

impl<T> NestedNode<T> {
    /// Leaf node.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Node with the given children.
    pub fn with_children(value: T, children: Vec<NestedNode<T>>) -> Self {
        Self { value, children }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create an empty arena with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a detached node (typically a root) and return its handle.
    pub fn add_node(&mut self, payload: T) -> NodeId {
        self.nodes.push(TreeNode {
            payload,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Add a new node as the last child of `parent`.
    ///
    /// # Errors
    /// `GraphError::NodeNotFound` if `parent` is not in this tree.
    pub fn add_child(&mut self, parent: NodeId, payload: T) -> GraphResult<NodeId> {
        self.ensure_contains(parent)?;
        let child = self.add_node(payload);
        self.nodes[parent].children.push(child);
        Ok(child)
    }

    /// Link an existing node as the last child of `parent`.
    ///
    /// Used for shared subtrees and back-edges; the resulting graph may
    /// contain cycles.
    ///
    /// # Errors
    /// `GraphError::NodeNotFound` if either handle is not in this tree.
    pub fn add_edge(&mut self, parent: NodeId, child: NodeId) -> GraphResult<()> {
        self.ensure_contains(parent)?;
        self.ensure_contains(child)?;
        self.nodes[parent].children.push(child);
        Ok(())
    }

    /// Build an arena from a nested tree, returning it with the root handle.
    ///
    /// Handles are assigned in pre-order, so the root is always `0`.
    pub fn from_nested(root: NestedNode<T>) -> (Self, NodeId) {
        let mut tree = Tree::new();
        let mut pending: Vec<(NestedNode<T>, Option<NodeId>)> = vec![(root, None)];

        while let Some((nested, parent)) = pending.pop() {
            let id = tree.add_node(nested.value);
            if let Some(parent) = parent {
                tree.nodes[parent].children.push(id);
            }
            // Reverse so the first child is materialized (and linked) first.
            for child in nested.children.into_iter().rev() {
                pending.push((child, Some(id)));
            }
        }

        (tree, 0)
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the arena has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if `id` is a handle of this tree.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id < self.nodes.len()
    }

    /// Node for `id`, if present.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.nodes.get(id)
    }

    /// Payload for `id`, if present.
    #[must_use]
    pub fn payload(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|n| &n.payload)
    }

    /// Children of `id` in order. Unknown handles and leaves both give an empty slice.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Lazily traverse depth-first (pre-order) from `root`.
    ///
    /// # Errors
    /// `GraphError::NodeNotFound` if `root` is not in this tree.
    pub fn depth_first(&self, root: NodeId) -> GraphResult<DepthFirst<'_, T>> {
        self.depth_first_with(root, TraversalParams::default())
    }

    /// Depth-first traversal with depth/node limits.
    pub fn depth_first_with(
        &self,
        root: NodeId,
        params: TraversalParams,
    ) -> GraphResult<DepthFirst<'_, T>> {
        self.ensure_contains(root)?;
        Ok(DepthFirst::new(self, root, params))
    }

    /// Lazily traverse breadth-first (level order) from `root`.
    ///
    /// # Errors
    /// `GraphError::NodeNotFound` if `root` is not in this tree.
    pub fn breadth_first(&self, root: NodeId) -> GraphResult<BreadthFirst<'_, T>> {
        self.breadth_first_with(root, TraversalParams::default())
    }

    /// Breadth-first traversal with depth/node limits.
    pub fn breadth_first_with(
        &self,
        root: NodeId,
        params: TraversalParams,
    ) -> GraphResult<BreadthFirst<'_, T>> {
        self.ensure_contains(root)?;
        Ok(BreadthFirst::new(self, root, params))
    }

    fn ensure_contains(&self, id: NodeId) -> GraphResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound(id))
        }
    }
}
