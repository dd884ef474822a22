//! Integration tests for the kata-graph crate.
//!
//! # Test Modules
//!
//! 1. `traversal_tests` - exactly-once visiting, cycles, limits
//! 2. `merge_tests` - merging traversal output with `merge_sorted`
//! 3. `domino_tests` - Euler conditions vs. exhaustive search
//! 4. `word_search_tests` - backtracking search vs. exhaustive search

pub mod domino_tests;
pub mod merge_tests;
pub mod traversal_tests;
pub mod word_search_tests;
