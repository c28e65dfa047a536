//! Error types for partitioned reductions
//!
//! Provides a unified error type for the parvec crates.

use thiserror::Error;

/// Core error type for partitioned-reduction operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Declared and actual buffer sizes disagree
    #[error("Size mismatch in {context}: expected {expected}, got {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// A slice or partial-sum transfer could not be delivered
    #[error("Transport error: {0}")]
    Transport(String),

    /// Threading or worker-execution error
    #[error("Execution error: {0}")]
    Execution(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a buffer shorter or longer than its declared count
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::SizeMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }

    /// Create an error for a failed channel send or receive
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport(detail.into())
    }
}
