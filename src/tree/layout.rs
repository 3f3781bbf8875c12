//! Pre-order node layout for trees of arbitrary capacity.
//!
//! A node is followed immediately by its whole left subtree and then by its
//! whole right subtree. A subtree over `k` leaves occupies `2k - 1` slots, so
//! the right child sits `2 * left_leaves` slots after its parent and the
//! whole tree fits in exactly `2 * capacity - 1` slots, power of two or not.
//!
//! ```text
//!            0  [0, 4]
//!          /          \
//!     1  [0, 2]      6  [3, 4]
//!      /     \        /    \
//!  2 [0,1]  5 [2]  7 [3]  8 [4]
//!   /   \
//! 3 [0] 4 [1]
//! ```

/// Number of slots needed for a tree over `capacity` leaves.
pub(crate) fn node_count(capacity: usize) -> usize {
    2 * capacity - 1
}

/// A node's slot together with the inclusive leaf range it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub node: usize,
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// The root span of a tree with `capacity >= 1` leaves.
    pub fn root(capacity: usize) -> Self {
        Span {
            node: 0,
            start: 0,
            end: capacity - 1,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.start == self.end
    }

    /// Last leaf of the left half.
    pub fn mid(&self) -> usize {
        self.start + (self.end - self.start) / 2
    }

    pub fn left(&self) -> Self {
        Span {
            node: self.node + 1,
            start: self.start,
            end: self.mid(),
        }
    }

    pub fn right(&self) -> Self {
        let mid = self.mid();
        let left_leaves = mid - self.start + 1;
        Span {
            node: self.node + 2 * left_leaves,
            start: mid + 1,
            end: self.end,
        }
    }

    /// Whether `[start, end]` covers this span entirely.
    pub fn within(&self, start: usize, end: usize) -> bool {
        start <= self.start && self.end <= end
    }

    /// Whether `[start, end]` shares no leaf with this span.
    pub fn disjoint(&self, start: usize, end: usize) -> bool {
        start > self.end || self.start > end
    }
}
