//! DFS (Depth-First Search) tree traversal.
//!
//! Explores the tree depth-first using an ITERATIVE approach (explicit stack).
//! NO RECURSION is used to avoid stack overflow on deep trees.
//!
//! Uses Vec<(NodeId, depth, parent)> as explicit stack.
//! Uses HashSet for O(1) visited lookup, local to each traversal.

mod iterator;
mod traversal;


pub use self::iterator::DepthFirst;
pub use self::traversal::{depth_first, dfs_traverse};
