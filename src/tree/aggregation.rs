//! Array-backed aggregation tree (segment tree) with amortized appends.
//!
//! The tree stores `2 * capacity - 1` nodes in pre-order (see
//! [`layout`](super::layout)). Leaves past `len` hold the monoid identity, so
//! the root always aggregates the full capacity without special cases.

use std::fmt;
use std::iter;

use tracing::debug;

use crate::config::GrowthPolicy;
use crate::error::{Result, SequenceError};
use crate::snapshot::TreeSnapshot;
use crate::tree::layout::{Span, node_count};
use crate::tree::monoid::Monoid;

/// A growable sequence supporting O(log n) point updates and range queries.
///
/// # Design
///
/// - One flat `Vec` in pre-order, sized exactly `2 * capacity - 1`
/// - Appends past capacity rebuild the whole tree at a larger capacity
///   chosen by the [`GrowthPolicy`], giving amortized O(log n) `push`
/// - Range queries combine strictly left to right, so non-commutative
///   monoids are supported
#[derive(Clone)]
pub struct AggregationTree<M: Monoid> {
    monoid: M,
    policy: GrowthPolicy,
    nodes: Vec<M::Value>,
    /// Number of live leaves visible to callers
    len: usize,
    /// Number of leaf slots currently allocated
    capacity: usize,
}

impl<M: Monoid> AggregationTree<M> {
    /// Builds a tree whose capacity equals the number of initial values.
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

    /// Like [`new`](Self::new), growing according to `policy`.
    pub fn with_policy<I>(values: I, monoid: M, policy: GrowthPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = M::Value>,
    {
        policy.validate()?;
        let values: Vec<M::Value> = values.into_iter().collect();
        if values.is_empty() {
            return Err(SequenceError::InvalidArgument(
                "an aggregation tree needs at least one initial value".into(),
            ));
        }

        let capacity = values.len();
        let nodes = Self::build(&monoid, capacity, values);
        Ok(AggregationTree {
            monoid,
            policy,
            nodes,
            len: capacity,
            capacity,
        })
    }

    /// Lays out `capacity` leaves and fills every internal node bottom-up.
    fn build(monoid: &M, capacity: usize, leaves: Vec<M::Value>) -> Vec<M::Value> {
        let mut nodes = vec![monoid.identity(); node_count(capacity)];
        // Pre-order visits leaves left to right, so they can be consumed in order.
        let mut leaves = leaves.into_iter();
        Self::build_span(monoid, &mut nodes, Span::root(capacity), &mut leaves);
        nodes
    }

    fn build_span(
        monoid: &M,
        nodes: &mut [M::Value],
        span: Span,
        leaves: &mut impl Iterator<Item = M::Value>,
    ) {
        if span.is_leaf() {
            if let Some(value) = leaves.next() {
                nodes[span.node] = value;
            }
            return;
        }
        let (left, right) = (span.left(), span.right());
        Self::build_span(monoid, nodes, left, leaves);
        Self::build_span(monoid, nodes, right, leaves);
        nodes[span.node] = monoid.combine(&nodes[left.node], &nodes[right.node]);
    }

    /// Returns the value at `index`.
    pub fn get(&self, index: usize) -> Result<&M::Value> {
        SequenceError::check_index(index, self.len)?;
        let mut span = Span::root(self.capacity);
        while !span.is_leaf() {
            span = if index <= span.mid() {
                span.left()
            } else {
                span.right()
            };
        }
        Ok(&self.nodes[span.node])
    }

    /// Overwrites the value at `index` and recombines its ancestors.
    pub fn set(&mut self, index: usize, value: M::Value) -> Result<()> {
        SequenceError::check_index(index, self.len)?;
        self.write(Span::root(self.capacity), index, value);
        Ok(())
    }

    fn write(&mut self, span: Span, index: usize, value: M::Value) {
        if span.is_leaf() {
            self.nodes[span.node] = value;
            return;
        }
        let (left, right) = (span.left(), span.right());
        if index <= left.end {
            self.write(left, index, value);
        } else {
            self.write(right, index, value);
        }
        self.nodes[span.node] = self
            .monoid
            .combine(&self.nodes[left.node], &self.nodes[right.node]);
    }

    /// Appends `value`, rebuilding at a larger capacity when every slot is used.
    pub fn push(&mut self, value: M::Value) {
        if self.len == self.capacity {
            self.grow();
        }
        self.len += 1;
        self.write(Span::root(self.capacity), self.len - 1, value);
    }

    /// Rebuilds into a fresh array; the old one is only dropped once the
    /// replacement is complete.
    fn grow(&mut self) {
        let new_capacity = self.policy.next_capacity(self.capacity);
        debug!(
            from = self.capacity,
            to = new_capacity,
            len = self.len,
            "rebuilding aggregation tree"
        );
        let padding = iter::repeat_n(self.monoid.identity(), new_capacity - self.len);
        let leaves: Vec<M::Value> = self.iter().cloned().chain(padding).collect();
        self.nodes = Self::build(&self.monoid, new_capacity, leaves);
        self.capacity = new_capacity;
    }

    /// Combines the values in the inclusive range `[start, end]`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if either bound is `>= len`. An inverted range
    /// (`start > end`) covers no leaf and yields the identity.
    pub fn query_range(&self, start: usize, end: usize) -> Result<M::Value> {
        SequenceError::check_range(start, end, self.len)?;
        Ok(self.query(Span::root(self.capacity), start, end))
    }

    fn query(&self, span: Span, start: usize, end: usize) -> M::Value {
        if span.within(start, end) {
            return self.nodes[span.node].clone();
        }
        if span.disjoint(start, end) {
            return self.monoid.identity();
        }
        let left = self.query(span.left(), start, end);
        let right = self.query(span.right(), start, end);
        self.monoid.combine(&left, &right)
    }

    /// Aggregate over every slot, padding included. Equal to
    /// `query_range(0, len - 1)` since padding holds the identity.
    pub fn total(&self) -> &M::Value {
        &self.nodes[0]
    }

    /// Live values in order.
    pub fn iter(&self) -> impl Iterator<Item = &M::Value> + '_ {
        let mut leaves = Vec::with_capacity(self.len);
        self.collect_leaves(Span::root(self.capacity), &mut leaves);
        leaves.into_iter()
    }

    fn collect_leaves<'a>(&'a self, span: Span, out: &mut Vec<&'a M::Value>) {
        if span.start >= self.len {
            return;
        }
        if span.is_leaf() {
            out.push(&self.nodes[span.node]);
            return;
        }
        self.collect_leaves(span.left(), out);
        self.collect_leaves(span.right(), out);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Pairs with [`len`](Self::len). A tree is built from at least one value
    /// and never shrinks, so this is false for every constructed tree.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn monoid(&self) -> &M {
        &self.monoid
    }

    pub fn identity(&self) -> M::Value {
        self.monoid.identity()
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    pub fn snapshot(&self) -> TreeSnapshot<M::Value> {
        TreeSnapshot {
            values: self.iter().cloned().collect(),
            capacity: self.capacity,
        }
    }
}

impl<M> fmt::Debug for AggregationTree<M>
where
    M: Monoid + fmt::Debug,
    M::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregationTree")
            .field("monoid", &self.monoid)
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("nodes", &self.nodes)
            .finish()
    }
}
