//! Tree traversal algorithms.
//!
//! Both traversals are lazy: they return iterators that pull one node at a
//! time, so a consumer can stop early without paying for the rest of the
//! tree. Visited tracking lives in the iterator, never on the nodes, so
//! the same tree can be traversed repeatedly or concurrently.
//!
//! # Algorithms
//!
//! - **DFS**: explicit LIFO stack, pre-order, first child first
//! - **BFS**: growing queue with a read cursor, level order
//!
//! # Examples
//!
//! ```
//! use kata_graph::traversal::{bfs_traverse, breadth_first, NestedNode, Tree, TraversalParams};
//!
//! //        1
//! //      / | \
//! //     2  3  4
//! //    / \     \
//! //   5   6     7
//! let nested = NestedNode::with_children(1, vec![
//!     NestedNode::with_children(2, vec![NestedNode::leaf(5), NestedNode::leaf(6)]),
//!     NestedNode::leaf(3),
//!     NestedNode::with_children(4, vec![NestedNode::leaf(7)]),
//! ]);
//! let (tree, root) = Tree::from_nested(nested);
//!
//! let order: Vec<i32> = breadth_first(&tree, root).unwrap().map(|v| *v.payload).collect();
//! assert_eq!(order, vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! let shallow = bfs_traverse(&tree, root, TraversalParams::default().max_depth(1)).unwrap();
//! assert_eq!(shallow.node_count(), 4);
//! ```

pub mod bfs;
pub mod dfs;
mod result;
mod tree;
mod types;

pub use self::bfs::{bfs_levels, bfs_traverse, breadth_first, BreadthFirst};
pub use self::dfs::{depth_first, dfs_traverse, DepthFirst};
pub use self::result::TraversalResult;
pub use self::tree::{NestedNode, NodeId, Tree, TreeNode};
pub use self::types::{TraversalParams, Visit};
