//! Tessera: a growable array with explicit capacity management, and a
//! dense matrix composed from it.
//!
//! This facade re-exports the sub-crates. Depending on `tessera` alone is
//! enough for most uses.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! let mut arr = DynamicArray::new();
//! for i in 0..5 {
//!     arr.push_back(i);
//! }
//! assert_eq!(arr.capacity(), 8);
//!
//! assert_eq!(arr.erase(2), Ok(2));
//! assert_eq!(arr.at(9), Err(ArrayError::IndexOutOfBounds { index: 9, len: 4 }));
//!
//! let a = DenseMatrix::from_rows([[1, 2]]).unwrap();
//! let b = DenseMatrix::from_rows([[3, 4]]).unwrap();
//! let sum = (&a + &b).unwrap();
//! assert_eq!(sum.row(0), Ok(&[4, 6][..]));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `tessera-array` | `DynamicArray`, cursors, capacity policy |
//! | [`matrix`] | `tessera-matrix` | `DenseMatrix` and its errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Dynamic array, cursors and capacity policy (`tessera-array`).
///
/// [`array::DynamicArray`] is the core container; [`array::CapacityPolicy`]
/// tunes how it grows and shrinks.
pub use tessera_array as array;

/// Dense matrices built from nested arrays (`tessera-matrix`).
pub use tessera_matrix as matrix;

/// Common imports.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Array
    pub use tessera_array::{CapacityPolicy, Cursor, CursorMut, DynamicArray};

    // Matrix
    pub use tessera_matrix::DenseMatrix;

    // Errors
    pub use tessera_array::{ArrayError, PolicyError};
    pub use tessera_matrix::MatrixError;
}
