//! Submatrix extraction and cofactor-expansion determinant

use num_traits::{Num, Signed};

use crate::matrix::dense::Matrix;
use crate::matrix::error::{MatrixError, Result};

impl<T> Matrix<T>
where
    T: Copy + Num,
{
    /// Returns the `(rows-1) × (cols-1)` matrix with `row` and `col` removed
    ///
    /// The remaining elements keep their relative order. Works for any shape
    /// with at least one row and one column.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `row` or `col` does not
    /// exist.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Self> {
        if row >= self.rows() || col >= self.cols() {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            }
            .logged());
        }
        Ok(self.minor_unchecked(row, col))
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Self {
        let data = self
            .row_iter()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .flat_map(|(_, values)| {
                values
                    .iter()
                    .enumerate()
                    .filter(move |&(j, _)| j != col)
                    .map(|(_, &v)| v)
            })
            .collect();

        Self::from_raw(self.rows() - 1, self.cols() - 1, data)
    }
}

impl<T> Matrix<T>
where
    T: Copy + Num + Signed,
{
    /// Computes the determinant by cofactor expansion along the first row
    ///
    /// `det([a]) = a` and
    /// `det(M) = Σ_j (-1)^j · M[0][j] · det(M without row 0 and column j)`.
    /// The 0×0 matrix has determinant one. Minors of a matrix with
    /// non-negative entries can be negative, so `T` must be signed.
    ///
    /// The expansion costs O(n!), which is fine for the small matrices this
    /// type is meant for but grows quickly past 10×10.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use dmatrix::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), -2.0);
    /// ```
    pub fn determinant(&self) -> Result<T> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            }
            .logged());
        }
        Ok(self.cofactor_expansion())
    }

    fn cofactor_expansion(&self) -> T {
        match self.rows() {
            0 => T::one(),
            1 => self.as_slice()[0],
            n => {
                let first_row = self.row(0);
                let mut det = T::zero();
                let mut sign = T::one();
                for j in 0..n {
                    det = det + sign * first_row[j] * self.minor_unchecked(0, j).cofactor_expansion();
                    sign = -sign;
                }
                det
            }
        }
    }
}
