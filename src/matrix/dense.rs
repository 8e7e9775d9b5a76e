//! Dense row-major matrix storage
//!
//! A `Matrix<T>` owns a single contiguous buffer of `rows * cols` elements.
//! Element `(i, j)` lives at `data[i * cols + j]`. The buffer is released when
//! the matrix is dropped, or earlier through [`Matrix::free`].

use std::mem;
use std::ops::{Index, IndexMut};

use log::{debug, warn};
use num_traits::Num;

use crate::matrix::error::{MatrixError, Result};

/// A dense matrix in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    /// Number of rows
    rows: usize,

    /// Number of columns
    cols: usize,

    /// Row-major elements (size: rows * cols)
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Creates the empty 0×0 matrix
    ///
    /// Every call produces a fresh value; there is no shared empty instance.
    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Wraps an existing buffer whose length is already known to match.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols, "buffer length must be rows * cols");
        Self { rows, cols, data }
    }

    /// Returns the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of stored elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the matrix holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major view of all elements
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the matrix and returns its row-major buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns row `i` as a slice
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.rows, "Row index out of bounds");
        let start = self.offset(i, 0);
        &self.data[start..start + self.cols]
    }

    /// Iterates over the rows of the matrix
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, and a matrix without columns has nothing to yield
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Releases the buffer and resets the matrix to the empty 0×0 value.
    ///
    /// Returns `false` (and logs a warning) when the matrix is already empty;
    /// freeing twice is therefore a harmless no-op.
    pub fn free(&mut self) -> bool {
        if self.rows == 0 && self.cols == 0 {
            warn!("free matrix error: matrix is already empty");
            return false;
        }

        debug!("freeing {}x{} matrix", self.rows, self.cols);
        *self = Self::empty();
        true
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Matrix<T>
where
    T: Copy + Num,
{
    /// Allocates a `rows × cols` matrix filled with zeros
    ///
    /// `allocate(0, 0)` returns the empty matrix without touching the
    /// allocator. A matrix with exactly one zero dimension keeps its shape and
    /// stores no elements.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Allocation`] if `rows * cols * size_of::<T>()`
    /// overflows or the allocator cannot provide the buffer.
    pub fn allocate(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 && cols == 0 {
            return Ok(Self::empty());
        }

        let len = checked_len::<T>(rows, cols)
            .ok_or_else(|| MatrixError::Allocation { rows, cols }.logged())?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::Allocation { rows, cols }.logged())?;
        data.resize(len, T::zero());

        debug!("allocated {}x{} matrix", rows, cols);
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from a row-major buffer
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DataLength`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = checked_len::<T>(rows, cols)
            .ok_or_else(|| MatrixError::Allocation { rows, cols }.logged())?;
        if data.len() != expected {
            return Err(MatrixError::DataLength {
                expected,
                actual: data.len(),
            }
            .logged());
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from a list of equally long rows
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        if let Some(row) = rows.iter().find(|row| row.len() != n_cols) {
            return Err(MatrixError::DimensionMismatch {
                op: "from_rows",
                left: (1, n_cols),
                right: (1, row.len()),
            }
            .logged());
        }

        let len = checked_len::<T>(n_rows, n_cols).ok_or_else(|| {
            MatrixError::Allocation {
                rows: n_rows,
                cols: n_cols,
            }
            .logged()
        })?;

        let mut data = Vec::with_capacity(len);
        for row in rows {
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Creates a matrix of zeros
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::allocate(rows, cols)
    }

    /// Creates a matrix of ones
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        let mut matrix = Self::allocate(rows, cols)?;
        matrix.data.iter_mut().for_each(|v| *v = T::one());
        Ok(matrix)
    }

    /// Creates an `n × n` identity matrix
    pub fn identity(n: usize) -> Result<Self> {
        let mut matrix = Self::allocate(n, n)?;
        for i in 0..n {
            let idx = matrix.offset(i, i);
            matrix.data[idx] = T::one();
        }
        Ok(matrix)
    }

    /// Returns element `(row, col)`, or `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    /// Overwrites element `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }
            .logged());
        }
        let idx = self.offset(row, col);
        self.data[idx] = value;
        Ok(())
    }
}

/// Number of elements of a `rows × cols` buffer of `T`, if its byte size
/// stays within what a single allocation may hold.
fn checked_len<T>(rows: usize, cols: usize) -> Option<usize> {
    let len = rows.checked_mul(cols)?;
    let bytes = len.checked_mul(mem::size_of::<T>())?;
    if bytes > isize::MAX as usize {
        return None;
    }
    Some(len)
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "Index ({}, {}) out of bounds for {}x{} matrix",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        &self.data[self.offset(index.0, index.1)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "Index ({}, {}) out of bounds for {}x{} matrix",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}
