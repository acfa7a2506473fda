//! Row-composed dense matrix.

use std::ops::{Add, Index, IndexMut};
use std::slice;

use tessera_array::DynamicArray;

use crate::error::MatrixError;

/// A fixed-shape matrix stored as a [`DynamicArray`] of row arrays.
///
/// Every row holds exactly [`cols`](Self::cols) elements and there are
/// exactly [`rows`](Self::rows) of them. The shape cannot change after
/// construction. A matrix with zero rows still remembers its column count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseMatrix<T = i32> {
    rows: usize,
    cols: usize,
    data: DynamicArray<DynamicArray<T>>,
}

impl<T: Default> DenseMatrix<T> {
    /// Create a `rows` x `cols` matrix filled with `T::default()`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimension`] if either dimension is negative.
    #[tracing::instrument(
        name = "DenseMatrix::new",
        level = "debug",
        skip_all,
        fields(rows = rows, cols = cols)
    )]
    pub fn new(rows: isize, cols: isize) -> Result<Self, MatrixError> {
        let invalid = MatrixError::InvalidDimension { rows, cols };
        let row_count = usize::try_from(rows).map_err(|_| invalid.clone())?;
        let col_count = usize::try_from(cols).map_err(|_| invalid)?;

        let mut data = DynamicArray::new();
        for _ in 0..row_count {
            let mut row = DynamicArray::new();
            for _ in 0..col_count {
                row.push_back(T::default());
            }
            data.push_back(row);
        }
        Ok(Self {
            rows: row_count,
            cols: col_count,
            data,
        })
    }
}

impl<T> DenseMatrix<T> {
    /// Build a matrix from nested rows.
    ///
    /// The first row fixes the column count; an empty input gives a 0x0
    /// matrix.
    ///
    /// # Errors
    ///
    /// [`MatrixError::RaggedRows`] naming the first row whose length
    /// differs from row 0.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut data = DynamicArray::new();
        let mut cols = None;
        for (index, row) in rows.into_iter().enumerate() {
            let row: DynamicArray<T> = row.into_iter().collect();
            match cols {
                None => cols = Some(row.size()),
                Some(expected) if expected != row.size() => {
                    return Err(MatrixError::RaggedRows {
                        row: index,
                        expected,
                        found: row.size(),
                    });
                }
                Some(_) => {}
            }
            data.push_back(row);
        }
        Ok(Self {
            rows: data.size(),
            cols: cols.unwrap_or(0),
            data,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Index`] carrying the array's bounds error for
    /// whichever index was out of range, row first.
    pub fn get(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        Ok(self.data.at(row)?.at(col)?)
    }

    /// Mutable element at `(row, col)`. Fails like [`get`](Self::get).
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        Ok(self.data.at_mut(row)?.at_mut(col)?)
    }

    /// Row `index` as a slice.
    pub fn row(&self, index: usize) -> Result<&[T], MatrixError> {
        Ok(self.data.at(index)?.as_slice())
    }

    /// Iterate over rows in order.
    pub fn iter_rows(&self) -> Rows<'_, T> {
        Rows {
            inner: self.data.iter(),
        }
    }

    /// Element-wise sum with `other`, leaving both operands untouched.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if the shapes differ.
    #[tracing::instrument(name = "DenseMatrix::try_add", level = "debug", skip_all)]
    pub fn try_add(&self, other: &Self) -> Result<Self, MatrixError>
    where
        T: Clone + Add<Output = T>,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut data = DynamicArray::with_capacity(self.rows);
        for (left, right) in self.data.iter().zip(other.data.iter()) {
            let sum: DynamicArray<T> = left
                .iter()
                .zip(right.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect();
            data.push_back(sum);
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

impl<T: Clone + Add<Output = T>> Add for &DenseMatrix<T> {
    type Output = Result<DenseMatrix<T>, MatrixError>;

    fn add(self, other: Self) -> Self::Output {
        self.try_add(other)
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get(row, col) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.get_mut(row, col) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Iterator over the rows of a [`DenseMatrix`], as slices.
#[derive(Debug)]
pub struct Rows<'a, T> {
    inner: slice::Iter<'a, DynamicArray<T>>,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]> {
        self.inner.next().map(DynamicArray::as_slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Rows<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(DynamicArray::as_slice)
    }
}

impl<T> ExactSizeIterator for Rows<'_, T> {}
