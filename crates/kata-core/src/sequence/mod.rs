//! Lazy sequences.
//!
//! Every producer in the workspace is an ordinary Rust iterator that is
//! also a [`FusedIterator`](std::iter::FusedIterator), which makes it a
//! [`LazySequence`]: values are computed when pulled, and once a finite
//! sequence reports [`Step::Exhausted`] it keeps doing so.
//!
//! # Components
//!
//! - [`Step`] / [`LazySequence`]: the pull protocol
//! - [`merge_sorted`]: merge two non-decreasing sequences
//! - [`expand_braces`]: combinatorial expansion of `{a,b}` patterns

mod braces;
mod merge;
mod step;


pub use self::braces::{expand_braces, BraceExpansion};
pub use self::merge::{merge_sorted, merge_sorted_by, MergeSorted, PartialOrderFn};
pub use self::step::{LazySequence, Step};
