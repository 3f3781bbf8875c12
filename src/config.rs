//! Growth configuration for aggregation trees.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SequenceError};

/// Default multiplier applied to the capacity on each rebuild-resize.
pub const DEFAULT_LOAD_FACTOR: f64 = 2.0;

/// Largest accepted multiplier.
pub const MAX_LOAD_FACTOR: f64 = 16.0;

/// Controls how far capacity jumps when an append overflows the tree.
///
/// The next capacity is `floor(capacity * load_factor) + 1`, so any factor
/// in `[1.0, MAX_LOAD_FACTOR]` guarantees growth. Larger factors rebuild
/// less often at the cost of more identity padding.
///
/// A policy can only be obtained through [`new`](Self::new),
/// [`Default`], or deserialization, all of which validate the factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrowthPolicy")]
pub struct GrowthPolicy {
    load_factor: f64,
}

/// Unvalidated wire form of [`GrowthPolicy`].
#[derive(Deserialize)]
#[serde(default)]
struct RawGrowthPolicy {
    load_factor: f64,
}

impl Default for RawGrowthPolicy {
    fn default() -> Self {
        RawGrowthPolicy {
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl TryFrom<RawGrowthPolicy> for GrowthPolicy {
    type Error = SequenceError;

    fn try_from(raw: RawGrowthPolicy) -> Result<Self> {
        GrowthPolicy::new(raw.load_factor)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy {
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl GrowthPolicy {
    pub fn new(load_factor: f64) -> Result<Self> {
        let policy = GrowthPolicy { load_factor };
        policy.validate()?;
        Ok(policy)
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Rejects factors that are not finite or outside `[1.0, MAX_LOAD_FACTOR]`.
    pub fn validate(&self) -> Result<()> {
        // NaN and infinities fall outside the range too.
        if !(1.0..=MAX_LOAD_FACTOR).contains(&self.load_factor) {
            return Err(SequenceError::InvalidArgument(format!(
                "load factor must be within [1.0, {MAX_LOAD_FACTOR}], got {}",
                self.load_factor
            )));
        }
        Ok(())
    }

    /// Capacity to rebuild to once `capacity` slots are full.
    ///
    /// Saturates at `usize::MAX` instead of overflowing.
    pub fn next_capacity(&self, capacity: usize) -> usize {
        // `as` saturates for floats beyond the integer range.
        let grown = (capacity as f64 * self.load_factor).floor() as usize;
        grown.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_growth() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(1), 3);
        assert_eq!(policy.next_capacity(2), 5);
        assert_eq!(policy.next_capacity(5), 11);
    }

    #[test]
    fn test_fractional_factor_still_grows() {
        let policy = GrowthPolicy::new(1.0).unwrap();
        assert_eq!(policy.next_capacity(4), 5);
        let policy = GrowthPolicy::new(1.5).unwrap();
        assert_eq!(policy.next_capacity(3), 5);
    }

    #[test]
    fn test_invalid_factors() {
        assert!(GrowthPolicy::new(0.5).is_err());
        assert!(GrowthPolicy::new(f64::NAN).is_err());
        assert!(GrowthPolicy::new(f64::INFINITY).is_err());
        assert!(GrowthPolicy::new(1e300).is_err());
        assert!(GrowthPolicy::new(MAX_LOAD_FACTOR + 0.5).is_err());
        assert!(GrowthPolicy::new(MAX_LOAD_FACTOR).is_ok());
    }

    #[test]
    fn test_deserialize() {
        let policy: GrowthPolicy = serde_json::from_str(r#"{"load_factor": 3.0}"#).unwrap();
        assert_eq!(policy.load_factor(), 3.0);
        let policy: GrowthPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, GrowthPolicy::default());
    }

    #[test]
    fn test_deserialize_rejects_invalid_factor() {
        assert!(serde_json::from_str::<GrowthPolicy>(r#"{"load_factor": 1e300}"#).is_err());
        assert!(serde_json::from_str::<GrowthPolicy>(r#"{"load_factor": 0.5}"#).is_err());
    }

    #[test]
    fn test_next_capacity_saturates() {
        let policy = GrowthPolicy::new(MAX_LOAD_FACTOR).unwrap();
        assert_eq!(policy.next_capacity(usize::MAX), usize::MAX);
        assert_eq!(policy.next_capacity(usize::MAX / 4), usize::MAX);
    }
}
