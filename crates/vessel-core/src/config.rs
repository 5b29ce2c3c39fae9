//! Growth configuration for containers.

use crate::error::ConfigError;

/// Controls how a full container picks its next capacity.
///
/// A container that needs one more slot than it has grows to
/// `max(min_capacity, capacity * factor)`. The defaults (`factor = 2`,
/// `min_capacity = 1`) give plain geometric doubling, which bounds the
/// total reallocation work of `n` sequential appends to `O(n)`.
///
/// Explicit `reserve` calls on a container bypass the policy and allocate
/// exactly what was asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Multiplier applied to the current capacity. Must be at least 2.
    ///
    /// Default: 2.
    pub factor: usize,

    /// Capacity chosen when growing from zero (and the floor for every
    /// later growth step). Must be non-zero.
    ///
    /// Default: 1.
    pub min_capacity: usize,
}

impl GrowthPolicy {
    /// Default growth multiplier.
    pub const DEFAULT_FACTOR: usize = 2;

    /// Default capacity of the first allocation.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// Plain doubling starting at one slot.
    pub const DOUBLING: Self = Self {
        factor: Self::DEFAULT_FACTOR,
        min_capacity: Self::DEFAULT_MIN_CAPACITY,
    };

    /// Create a policy with the given factor and minimum capacity.
    ///
    /// The result is not validated; call [`validate()`](Self::validate)
    /// before handing it to a container, or use a constructor that does.
    pub const fn new(factor: usize, min_capacity: usize) -> Self {
        Self {
            factor,
            min_capacity,
        }
    }

    /// Check the structural invariants of the policy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.factor < 2 {
            return Err(ConfigError::InvalidGrowthFactor {
                factor: self.factor,
            });
        }
        if self.min_capacity == 0 {
            return Err(ConfigError::ZeroMinCapacity);
        }
        Ok(())
    }

    /// Capacity to grow to from `current` when one more slot is needed.
    ///
    /// Returns `None` if the multiplication overflows `usize`.
    pub fn next_capacity(&self, current: usize) -> Option<usize> {
        let scaled = current.checked_mul(self.factor)?;
        Some(scaled.max(self.min_capacity))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DOUBLING
    }
}
