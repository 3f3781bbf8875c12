//! Soft-delete sequence: an aggregation tree with logical deletion.
//!
//! Deleting an element tombstones its physical slot and overwrites it with
//! the monoid identity instead of shifting the backing storage. All public
//! indices are logical: they count only live elements.

use std::fmt;

use tracing::trace;

use crate::config::GrowthPolicy;
use crate::error::{Result, SequenceError};
use crate::sequence::tombstones::Tombstones;
use crate::snapshot::SequenceSnapshot;
use crate::tree::{AggregationTree, Monoid};

/// A growable sequence with O(log n) range aggregation and O(log² n) deletes.
///
/// # Design
///
/// - `values` holds every element ever appended, deleted slots included
/// - `tombstones` marks deleted physical slots and answers prefix counts
/// - Logical indices are translated by binary search over those counts
///
/// Range queries over the backing tree stay correct because every
/// tombstoned slot holds the identity and contributes nothing.
#[derive(Clone)]
pub struct SoftDeleteSequence<M: Monoid> {
    values: AggregationTree<M>,
    tombstones: Tombstones,
    /// Live (apparent) element count
    len: usize,
}

impl<M: Monoid> SoftDeleteSequence<M> {
    /// Creates a sequence holding `values`, none of them deleted.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `values` is empty.
    pub fn new<I>(values: I, monoid: M) -> Result<Self>
    where
        I: IntoIterator<Item = M::Value>,
    {
        Self::with_policy(values, monoid, GrowthPolicy::default())
    }

    /// Like [`new`](Self::new), growing both trees according to `policy`.
    pub fn with_policy<I>(values: I, monoid: M, policy: GrowthPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = M::Value>,
    {
        let values = AggregationTree::with_policy(values, monoid, policy)?;
        let tombstones = Tombstones::with_len(values.len(), policy)?;
        let len = values.len();
        Ok(SoftDeleteSequence {
            values,
            tombstones,
            len,
        })
    }

    /// Translates a logical index to the physical slot holding it.
    ///
    /// Finds the smallest `p` in `[index, physical_len)` where
    /// `p - index >= tombstones in [0, p]`, i.e. the `(index + 1)`-th live
    /// slot. Each probe is a range sum, so this costs O(log² capacity).
    pub fn physical_index(&self, index: usize) -> Result<usize> {
        SequenceError::check_index(index, self.len)?;
        let mut low = index;
        let mut high = self.values.len();
        while low < high {
            let mid = low + (high - low) / 2;
            if mid - index < self.tombstones.marked_through(mid)? {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        trace!(logical = index, physical = low, "translated index");
        Ok(low)
    }

    pub fn get(&self, index: usize) -> Result<&M::Value> {
        let physical = self.physical_index(index)?;
        self.values.get(physical)
    }

    pub fn set(&mut self, index: usize, value: M::Value) -> Result<()> {
        let physical = self.physical_index(index)?;
        self.values.set(physical, value)
    }

    /// Combines the live values in the inclusive logical range `[start, end]`.
    pub fn query_range(&self, start: usize, end: usize) -> Result<M::Value> {
        SequenceError::check_range(start, end, self.len)?;
        let start = self.physical_index(start)?;
        let end = self.physical_index(end)?;
        self.values.query_range(start, end)
    }

    /// Appends a live value at the end of the sequence.
    pub fn push(&mut self, value: M::Value) {
        self.values.push(value);
        self.tombstones.push_live();
        self.len += 1;
    }

    /// Removes the element at logical `index` from the apparent sequence.
    ///
    /// Later elements shift down by one logical position; nothing moves in
    /// the backing storage.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        let physical = self.physical_index(index)?;
        self.tombstones.mark(physical)?;
        let identity = self.values.identity();
        self.values.set(physical, identity)?;
        self.len -= 1;
        trace!(logical = index, physical, remaining = self.len, "deleted element");
        Ok(())
    }

    /// Live element count.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Backing capacity minus tombstones.
    ///
    /// Despite the name this counts slots not known to be deleted, not the
    /// allocation. See [`physical_capacity`](Self::physical_capacity) for
    /// the latter.
    pub fn capacity(&self) -> usize {
        self.values.capacity() - self.tombstones.total()
    }

    /// Leaf slots allocated in the backing tree.
    pub fn physical_capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Elements ever appended, deleted ones included.
    pub fn physical_len(&self) -> usize {
        self.values.len()
    }

    pub fn deleted_count(&self) -> usize {
        self.tombstones.total()
    }

    pub fn monoid(&self) -> &M {
        self.values.monoid()
    }

    pub fn identity(&self) -> M::Value {
        self.values.identity()
    }

    /// Live values in logical order.
    pub fn iter(&self) -> impl Iterator<Item = &M::Value> + '_ {
        self.values
            .iter()
            .zip(self.tombstones.iter())
            .filter(|(_, deleted)| !deleted)
            .map(|(value, _)| value)
    }

    pub fn snapshot(&self) -> SequenceSnapshot<M::Value> {
        SequenceSnapshot {
            backing: self.values.snapshot(),
            tombstones: self.tombstones.snapshot(),
            apparent: self.iter().cloned().collect(),
        }
    }
}

impl<M> fmt::Debug for SoftDeleteSequence<M>
where
    M: Monoid + fmt::Debug,
    M::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoftDeleteSequence")
            .field("len", &self.len)
            .field("values", &self.values)
            .field("tombstones", &self.tombstones)
            .finish()
    }
}
