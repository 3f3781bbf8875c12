//! Error types for aggregation trees and soft-delete sequences.
//!
//! Every fallible operation validates its arguments before touching any
//! state, so an `Err` always means the structure is unchanged.

use thiserror::Error;

/// The error type shared by [`AggregationTree`](crate::AggregationTree) and
/// [`SoftDeleteSequence`](crate::SoftDeleteSequence).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// An index or range bound fell outside `[0, len - 1]`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length the index was checked against.
        len: usize,
    },

    /// A constructor or range argument was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation would corrupt internal bookkeeping.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SequenceError>;

impl SequenceError {
    /// Checks `index < len`, producing `IndexOutOfRange` otherwise.
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(SequenceError::IndexOutOfRange { index, len })
        }
    }

    /// Checks both bounds of an inclusive range `[start, end]` against `len`.
    ///
    /// Bound order is not checked: an inverted range is empty and folds to
    /// the identity.
    pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
        Self::check_index(start, len)?;
        Self::check_index(end, len)
    }
}
