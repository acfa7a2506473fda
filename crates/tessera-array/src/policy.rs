//! Capacity growth and shrink policy.

use crate::error::PolicyError;

/// Controls how a [`DynamicArray`](crate::DynamicArray) grows and shrinks.
///
/// The defaults give the classic doubling array: capacity goes
/// `1, 2, 4, 8, ...` on exhaustion and halves once (never below one slot)
/// whenever a removal leaves the array at most a quarter full.
/// Validated by [`DynamicArray::with_policy`](crate::DynamicArray::with_policy);
/// an array's policy is fixed for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CapacityPolicy {
    /// Multiplier applied to a full, non-empty buffer.
    ///
    /// Default: 2. Must be at least 2.
    pub growth_factor: usize,

    /// Capacity of the first allocation and floor for every shrink.
    ///
    /// Default: 1. Must be at least 1.
    pub min_capacity: usize,

    /// Shrink when `len <= capacity / shrink_divisor`.
    ///
    /// Default: 4. Must be at least 2 so the halved buffer still holds
    /// every live element.
    pub shrink_divisor: usize,

    /// Whether removals may release memory at all.
    pub shrink_enabled: bool,
}

impl CapacityPolicy {
    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Default first allocation and shrink floor.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// Default occupancy divisor that triggers a shrink.
    pub const DEFAULT_SHRINK_DIVISOR: usize = 4;

    /// The doubling/quarter-halving policy.
    pub const DEFAULT: Self = Self {
        growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        min_capacity: Self::DEFAULT_MIN_CAPACITY,
        shrink_divisor: Self::DEFAULT_SHRINK_DIVISOR,
        shrink_enabled: true,
    };

    /// Default policy with automatic shrinking turned off.
    ///
    /// Capacity then only ever decreases through
    /// [`shrink_to_fit`](crate::DynamicArray::shrink_to_fit).
    pub const fn grow_only() -> Self {
        Self {
            shrink_enabled: false,
            ..Self::DEFAULT
        }
    }

    /// Check that the policy keeps every array invariant intact.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.growth_factor < 2 {
            return Err(PolicyError::GrowthFactorTooSmall {
                growth_factor: self.growth_factor,
            });
        }
        if self.min_capacity == 0 {
            return Err(PolicyError::ZeroMinCapacity);
        }
        if self.shrink_divisor < 2 {
            return Err(PolicyError::ShrinkDivisorTooSmall {
                shrink_divisor: self.shrink_divisor,
            });
        }
        Ok(())
    }

    /// Capacity to grow to when a buffer of `current` slots is full.
    ///
    /// Returns `None` on arithmetic overflow.
    pub fn grown_capacity(&self, current: usize) -> Option<usize> {
        if current == 0 {
            return Some(self.min_capacity);
        }
        current
            .checked_mul(self.growth_factor)
            .map(|grown| grown.max(self.min_capacity))
    }

    /// Capacity to shrink to after a removal, or `None` to keep the buffer.
    ///
    /// One halving step: `max(min_capacity, capacity / 2)`, applied only
    /// when `len <= capacity / shrink_divisor` and the result is smaller
    /// than `capacity`.
    pub fn shrunk_capacity(&self, capacity: usize, len: usize) -> Option<usize> {
        if !self.shrink_enabled || capacity == 0 {
            return None;
        }
        let threshold = capacity.checked_div(self.shrink_divisor)?;
        if len > threshold {
            return None;
        }
        let target = (capacity / 2).max(self.min_capacity);
        (target < capacity).then_some(target)
    }

    /// Tightest capacity that still honours `min_capacity`.
    pub fn fitted_capacity(&self, len: usize) -> usize {
        len.max(self.min_capacity)
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
