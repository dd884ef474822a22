//! Error types for graph and search operations.
//!
//! Every operation here is total on well-formed input. The variants cover
//! the preconditions that are cheap to check (unknown node handles,
//! malformed tiles) and the optional search budget.

use thiserror::Error;

use kata_core::CoreError;

use crate::traversal::NodeId;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node handle does not belong to the tree.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Invalid input provided to a function.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Word search tried more path extensions than allowed.
    #[error("Search budget exhausted after {limit} steps")]
    SearchBudgetExceeded { limit: u64 },

    /// Error raised by kata-core (configuration, sequences).
    #[error(transparent)]
    Core(#[from] CoreError),
}

// Compile-time verification that GraphError is thread-safe
static_assertions::assert_impl_all!(GraphError: Send, Sync, std::error::Error);
