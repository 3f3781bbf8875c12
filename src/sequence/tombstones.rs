//! Deletion tracking over physical positions.
//!
//! Each physical slot of a backing tree has a matching slot here holding `0`
//! (live) or `1` (tombstoned). Prefix sums over these slots drive the
//! logical to physical index translation.

use crate::config::GrowthPolicy;
use crate::error::{Result, SequenceError};
use crate::snapshot::TreeSnapshot;
use crate::tree::{AggregationTree, Sum};

const LIVE: usize = 0;
const TOMBSTONE: usize = 1;

/// A sum tree of tombstone markers, one per physical slot.
#[derive(Debug, Clone)]
pub struct Tombstones {
    marks: AggregationTree<Sum<usize>>,
}

impl Tombstones {
    /// `len` live slots, growing with the same policy as the paired tree.
    pub fn with_len(len: usize, policy: GrowthPolicy) -> Result<Self> {
        let marks = AggregationTree::with_policy(vec![LIVE; len], Sum::new(), policy)?;
        Ok(Tombstones { marks })
    }

    /// Tracks one more live slot at the end.
    pub fn push_live(&mut self) {
        self.marks.push(LIVE);
    }

    pub fn is_marked(&self, physical: usize) -> Result<bool> {
        Ok(*self.marks.get(physical)? == TOMBSTONE)
    }

    /// Tombstones `physical`.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the slot is already tombstoned. Marking it twice
    /// would count it twice in every prefix sum.
    pub fn mark(&mut self, physical: usize) -> Result<()> {
        if self.is_marked(physical)? {
            return Err(SequenceError::InvalidState(format!(
                "physical slot {physical} is already deleted"
            )));
        }
        self.marks.set(physical, TOMBSTONE)
    }

    /// Number of tombstones in `[0, physical]`.
    pub fn marked_through(&self, physical: usize) -> Result<usize> {
        self.marks.query_range(0, physical)
    }

    /// Whether each physical slot is tombstoned, in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.marks.iter().map(|mark| *mark == TOMBSTONE)
    }

    /// Number of tombstones overall.
    pub fn total(&self) -> usize {
        *self.marks.total()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.marks.capacity()
    }

    pub fn snapshot(&self) -> TreeSnapshot<usize> {
        self.marks.snapshot()
    }
}
