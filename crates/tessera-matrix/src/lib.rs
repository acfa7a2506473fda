//! Dense two-dimensional matrices for Tessera.
//!
//! [`DenseMatrix`] owns one [`DynamicArray`](tessera_array::DynamicArray)
//! per row, so every element access goes through the array's checked
//! `at` twice: once for the row and once for the column. Shape is fixed at
//! construction; elements are edited in place.
//!
//! Only element-wise addition is provided.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod matrix;

pub use error::MatrixError;
pub use matrix::{DenseMatrix, Rows};
