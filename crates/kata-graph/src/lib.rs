//! Graph-shaped katas: tree traversal, domino chaining and grid word search
//!
//! # Architecture
//!
//! - **error**: `GraphError` and the `GraphResult` alias
//! - **traversal**: arena `Tree` with lazy DFS and BFS iterators
//! - **domino**: chain decision (Euler conditions) and construction (Hierholzer)
//! - **word_search**: backtracking snake search over a character grid
//!
//! Every producer here is a [`FusedIterator`](std::iter::FusedIterator),
//! so it is also a [`kata_core::LazySequence`].
//!
//! # Example
//!
//! ```
//! use kata_graph::error::GraphResult;
//! use kata_graph::{can_chain, find_word, Domino, Tree};
//!
//! fn example() -> GraphResult<()> {
//!     let mut tree = Tree::new();
//!     let root = tree.add_node("root");
//!     tree.add_child(root, "leaf")?;
//!     assert_eq!(tree.depth_first(root)?.count(), 2);
//!
//!     assert!(can_chain(&[Domino::new(0, 1), Domino::new(1, 1)]));
//!     assert!(find_word(&["RE", "DA"], "read"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod domino;
pub mod error;
pub mod traversal;
pub mod word_search;

// Re-exports for convenience
pub use domino::{arrange, can_chain, Chain, Domino};
pub use error::{GraphError, GraphResult};
pub use traversal::{
    bfs_levels, bfs_traverse, breadth_first, depth_first, dfs_traverse, BreadthFirst, DepthFirst,
    NestedNode, NodeId, TraversalParams, TraversalResult, Tree, TreeNode, Visit,
};
pub use word_search::{find_word, Direction, Grid, Position, SearchParams};
