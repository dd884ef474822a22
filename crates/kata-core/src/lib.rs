//! Kata Core Library
//!
//! Shared building blocks for the kata workspace.
//!
//! # Architecture
//!
//! This crate defines:
//! - Error types and result aliases
//! - Configuration structures (logging, traversal limits, search budget)
//! - Lazy sequences: the pull protocol, sorted-stream merging and brace expansion
//!
//! # Example
//!
//! ```
//! use kata_core::sequence::{merge_sorted, LazySequence, Step};
//!
//! let mut merged = merge_sorted(|| vec![1, 4], || vec![2, 3]);
//! assert_eq!(merged.pull(), Step::Yielded(1));
//! assert_eq!(merged.by_ref().collect::<Vec<_>>(), vec![2, 3, 4]);
//! assert_eq!(merged.pull(), Step::Exhausted);
//! ```

pub mod config;
pub mod error;
pub mod sequence;

// Re-exports for convenience
pub use config::{Config, LoggingConfig, SearchConfig, TraversalConfig};
pub use error::{CoreError, CoreResult};
pub use sequence::{expand_braces, merge_sorted, merge_sorted_by, LazySequence, Step};
