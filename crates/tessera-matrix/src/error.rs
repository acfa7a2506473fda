//! Error types for matrix construction, access and arithmetic.

use std::error::Error;
use std::fmt;

use tessera_array::ArrayError;

/// Errors arising from matrix operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// A requested dimension was negative.
    InvalidDimension {
        /// Requested row count.
        rows: isize,
        /// Requested column count.
        cols: isize,
    },
    /// Rows supplied to [`DenseMatrix::from_rows`](crate::DenseMatrix::from_rows)
    /// have different lengths.
    RaggedRows {
        /// Index of the first row whose length differs.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// Operands of an element-wise operation have different shapes.
    DimensionMismatch {
        /// `(rows, cols)` of the left operand.
        left: (usize, usize),
        /// `(rows, cols)` of the right operand.
        right: (usize, usize),
    },
    /// A row or column index was rejected by the underlying array.
    Index(ArrayError),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, cols } => {
                write!(f, "invalid matrix dimensions {rows}x{cols}")
            }
            Self::RaggedRows {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has {found} columns, expected {expected}")
            }
            Self::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            Self::Index(err) => write!(f, "matrix index error: {err}"),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Index(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArrayError> for MatrixError {
    fn from(err: ArrayError) -> Self {
        Self::Index(err)
    }
}
