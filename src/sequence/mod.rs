//! Sequences with logical (soft) deletion.
//!
//! This module contains the tombstone tracker and the soft-delete sequence
//! built on top of two aggregation trees.

pub mod soft_delete;
pub mod tombstones;

// Re-export the main public API
pub use soft_delete::SoftDeleteSequence;
pub use tombstones::Tombstones;
