//! # segseq - Aggregating sequences with soft deletion
//!
//! A growable sequence that answers range aggregates under any associative
//! operator in O(log n), plus a wrapper that deletes elements logically
//! without shifting the backing storage.
//!
//! ## Features
//!
//! - **Any monoid**: sums, extrema, or a caller closure with its identity
//! - **Order preserving**: non-commutative operators fold left to right
//! - **Compact**: exactly `2 * capacity - 1` nodes for any capacity
//! - **Amortized appends**: full rebuilds at geometrically growing capacity
//! - **Tombstone-based deletion**: O(log² n) logical to physical translation
//!
//! ## Example
//!
//! ```rust
//! use segseq::{SoftDeleteSequence, Sum};
//!
//! let mut seq = SoftDeleteSequence::new(vec![1, 2], Sum::<i64>::new()).unwrap();
//! seq.push(10);
//! assert_eq!(seq.query_range(0, 2).unwrap(), 13);
//!
//! seq.delete(0).unwrap();
//! assert_eq!(seq.query_range(0, 1).unwrap(), 12);
//! assert_eq!(*seq.get(0).unwrap(), 2);
//! ```
//!
//! Instances are single-owner and not synchronized; callers sharing one
//! across threads must serialize access themselves.

pub mod config;
pub mod error;
pub mod sequence;
pub mod snapshot;
pub mod tree;

// Re-export the main public API
pub use config::{DEFAULT_LOAD_FACTOR, GrowthPolicy, MAX_LOAD_FACTOR};
pub use error::{Result, SequenceError};
pub use sequence::{SoftDeleteSequence, Tombstones};
pub use snapshot::{SequenceSnapshot, TreeSnapshot};
pub use tree::{AggregationTree, Bounded, FnMonoid, Max, Min, Monoid, Sum};
