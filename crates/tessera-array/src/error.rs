//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during checked array operations.
///
/// Every checked operation validates its arguments before touching the
/// array, so receiving one of these means the array is unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A position lies outside the valid range for the current length.
    ///
    /// Element access and `erase` accept `0..len`; `insert` accepts `0..=len`.
    IndexOutOfBounds {
        /// The offending position.
        index: usize,
        /// Length of the array at the time of the call.
        len: usize,
    },
    /// An operation that needs at least one element was called on an
    /// empty array.
    Empty {
        /// Name of the operation (`"front"`, `"back"`, `"pop_back"`).
        operation: &'static str,
    },
    /// The requested capacity cannot be represented as an allocation layout.
    CapacityOverflow {
        /// Number of slots requested.
        requested: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::Empty { operation } => {
                write!(f, "{operation} called on an empty array")
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: cannot allocate {requested} slots")
            }
        }
    }
}

impl Error for ArrayError {}

/// Errors produced when validating a [`CapacityPolicy`](crate::CapacityPolicy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// Growth must at least double, otherwise pushes stop being amortised O(1).
    GrowthFactorTooSmall {
        /// The rejected factor.
        growth_factor: usize,
    },
    /// The capacity seed and shrink floor must be at least one slot.
    ZeroMinCapacity,
    /// A divisor below 2 would let a shrink cut capacity below the length.
    ShrinkDivisorTooSmall {
        /// The rejected divisor.
        shrink_divisor: usize,
    },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GrowthFactorTooSmall { growth_factor } => {
                write!(f, "growth factor must be at least 2, got {growth_factor}")
            }
            Self::ZeroMinCapacity => write!(f, "minimum capacity must be at least 1"),
            Self::ShrinkDivisorTooSmall { shrink_divisor } => {
                write!(f, "shrink divisor must be at least 2, got {shrink_divisor}")
            }
        }
    }
}

impl Error for PolicyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_reports_index_and_len() {
        let err = ArrayError::IndexOutOfBounds { index: 7, len: 5 };
        assert_eq!(err.to_string(), "index 7 out of bounds for length 5");
    }

    #[test]
    fn empty_error_names_the_operation() {
        let err = ArrayError::Empty {
            operation: "pop_back",
        };
        assert!(err.to_string().starts_with("pop_back"));
    }

    #[test]
    fn policy_errors_are_std_errors() {
        let err: Box<dyn Error> = Box::new(PolicyError::ZeroMinCapacity);
        assert_eq!(err.to_string(), "minimum capacity must be at least 1");
    }
}
