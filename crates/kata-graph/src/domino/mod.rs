//! Domino chaining.
//!
//! Each distinct face value is a vertex and each tile an edge between its
//! two faces. A row of all tiles is a walk that uses every edge exactly
//! once, so a chain exists iff the touched vertices are connected and 0 or
//! 2 of them have odd degree.
//!
//! # Examples
//!
//! ```
//! use kata_graph::domino::{arrange, can_chain, Domino};
//!
//! let tiles = [Domino::new(1, 1), Domino::new(2, 2), Domino::new(1, 2)];
//! assert!(can_chain(&tiles));
//!
//! let chain = arrange(&tiles).unwrap();
//! assert!(chain.is_valid());
//! assert_eq!(chain.len(), 3);
//!
//! assert!(!can_chain(&[Domino::new(1, 1), Domino::new(0, 3), Domino::new(1, 4)]));
//! ```

mod chain;
mod graph;
mod types;


pub use self::chain::{arrange, can_chain};
pub use self::types::{Chain, Domino};
