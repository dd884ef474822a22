//! Error types for CLI commands
//!
//! # Exit Codes
//!
//! | Code | Meaning | Description |
//! |------|---------|-------------|
//! | 0 | Success | Command ran; a `false` answer is still success |
//! | 1 | General Error | IO failure or exhausted search budget |
//! | 2 | Configuration | Config file or environment is invalid |
//! | 4 | Invalid Input | Malformed arguments or input file |

use thiserror::Error;

use kata_core::CoreError;
use kata_graph::GraphError;

/// Result type alias for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed argument.
    /// Exit code: 4
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON input could not be parsed.
    /// Exit code: 4
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error from kata-core (configuration, brace patterns).
    /// Exit code: 2 for configuration, otherwise 4 or 1
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Error from kata-graph.
    /// Exit code: 4, or 1 for an exhausted search budget
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// IO operation failed
    /// Exit code: 1
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[inline]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) | Self::Serialization(_) => 4,
            Self::Core(core) => core_exit_code(core),
            Self::Graph(GraphError::Core(core)) => core_exit_code(core),
            Self::Graph(GraphError::SearchBudgetExceeded { .. }) => 1,
            Self::Graph(GraphError::NodeNotFound(_) | GraphError::InvalidInput(_)) => 4,
            Self::Io(_) => 1,
        }
    }

    /// Stable error code string (e.g. "ERR_CONFIG").
    pub fn error_code(&self) -> &'static str {
        match self.exit_code() {
            2 => "ERR_CONFIG",
            4 => "ERR_INVALID_INPUT",
            _ => match self {
                Self::Graph(GraphError::SearchBudgetExceeded { .. }) => "ERR_BUDGET",
                _ => "ERR_IO",
            },
        }
    }

    /// Create invalid input error
    #[inline]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

fn core_exit_code(error: &CoreError) -> i32 {
    match error {
        CoreError::ConfigError(_) => 2,
        CoreError::InvalidInput(_) | CoreError::SerializationError(_) => 4,
        CoreError::Io(_) => 1,
    }
}
