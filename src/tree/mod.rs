//! Aggregation trees and the combine operators they fold with.
//!
//! This module contains the array-packed aggregation tree, its pre-order
//! node layout, and the [`Monoid`] trait with a few stock operators.

pub mod aggregation;
mod layout;
pub mod monoid;

// Re-export the main public API
pub use aggregation::AggregationTree;
pub use monoid::{Bounded, FnMonoid, Max, Min, Monoid, Sum};
