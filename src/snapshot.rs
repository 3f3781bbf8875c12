//! Read-only snapshots for diagnostics.
//!
//! Snapshots copy the live contents of a tree or sequence so callers can
//! print or serialize them without holding a borrow on the structure.

use serde::Serialize;
use std::fmt;

/// The live values of an aggregation tree and its slot capacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeSnapshot<T> {
    pub values: Vec<T>,
    pub capacity: usize,
}

impl<T: fmt::Display> fmt::Display for TreeSnapshot<T> {
    /// Renders `[ 1 2 _ _ ]`, one `_` per slot past the live length.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for value in &self.values {
            write!(f, "{value} ")?;
        }
        for _ in self.values.len()..self.capacity {
            f.write_str("_ ")?;
        }
        f.write_str("]")
    }
}

/// Backing storage, tombstones and apparent values of a soft-delete sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceSnapshot<T> {
    pub backing: TreeSnapshot<T>,
    pub tombstones: TreeSnapshot<usize>,
    pub apparent: Vec<T>,
}

impl<T: fmt::Display> fmt::Display for SequenceSnapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.backing)?;
        writeln!(f, "{}", self.tombstones)?;
        f.write_str("Apparent array [ ")?;
        for value in &self.apparent {
            write!(f, "{value} ")?;
        }
        f.write_str("]")
    }
}
