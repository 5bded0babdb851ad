//! Error types shared by every collection operation.

use thiserror::Error;

/// Result type for collection operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by collection operations.
///
/// "Not found" is never an error: searches return [`Option`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument has the wrong shape or an unusable value, such as a
    /// dynamic value that is neither a sequence nor a mapping, or a negative
    /// element count.
    #[error("{operation}: invalid argument: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },

    /// `reduce` was given an empty collection and no initial accumulator.
    #[error("reduce of an empty collection with no initial value")]
    EmptyReduce,
}

impl Error {
    /// Builds an [`Error::InvalidArgument`] for `operation`.
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn is_empty_reduce(&self) -> bool {
        matches!(self, Self::EmptyReduce)
    }

    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
