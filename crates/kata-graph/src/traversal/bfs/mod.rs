//! BFS (Breadth-First Search) tree traversal.
//!
//! Explores the tree level by level.
//! Uses a growing Vec with a read cursor as the FIFO frontier.
//! Uses HashSet for O(1) visited lookup, local to each traversal.

mod iterator;
mod traversal;


pub use self::iterator::BreadthFirst;
pub use self::traversal::{bfs_levels, bfs_traverse, breadth_first};
