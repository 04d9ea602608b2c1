//! Error types for the editing engine

use thiserror::Error;

use crate::expression::ExpressionError;

/// Main error type for edit operations
#[derive(Debug, Error)]
pub enum Error {
    /// The session's change budget is exhausted; writes already applied stay applied.
    #[error("Change limit of {limit} blocks exceeded")]
    ChangeLimitExceeded { limit: usize },

    /// A parameter was out of its domain; raised before any write happens.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Expression error: {0}")]
    Expression(#[from] ExpressionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for building an `InvalidArgument` error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Whether this error is the change limiter aborting an operation.
    pub fn is_change_limit(&self) -> bool {
        matches!(self, Error::ChangeLimitExceeded { .. })
    }
}

/// Returns `InvalidArgument` with `msg` unless `cond` holds.
pub(crate) fn check_argument(cond: bool, msg: &str) -> crate::core::Result<()> {
    if cond {
        Ok(())
    } else {
        Err(Error::invalid(msg))
    }
}
