//! Crate-level error taxonomy.
//!
//! All errors are validation failures raised synchronously at the point of
//! the offending call. Nothing here is retryable, and no error is ever
//! deferred into a timer callback.

use thiserror::Error;

/// Validation failures for the utility primitives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An argument failed validation.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: String,
    },

    /// A strictly-partitioned sequence had a length not divisible by the
    /// group size.
    #[error("a sequence of length {len} cannot be evenly split into groups of {group_size}")]
    LengthMismatch {
        /// Length of the input sequence.
        len: usize,
        /// Requested group size.
        group_size: usize,
    },
}

impl Error {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }
}
