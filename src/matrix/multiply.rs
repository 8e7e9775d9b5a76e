//! Dense matrix multiplication
//!
//! A straightforward triple loop. It is the baseline the interop tests
//! compare against `ndarray` and `sprs`.

use num_traits::Num;

use crate::matrix::dense::Matrix;
use crate::matrix::error::{MatrixError, Result};

impl<T> Matrix<T>
where
    T: Copy + Num,
{
    /// Computes the product `C = A×B`
    ///
    /// `C[i][j] = Σ_k A[i][k] * B[k][j]`, so `C` has shape
    /// `A.rows × B.cols`. Cost is O(rows·inner·cols).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] if `A.cols != B.rows`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dmatrix::Matrix;
    ///
    /// // [1 2] × [4 5] = [16 19]
    /// // [0 3]   [6 7]   [18 21]
    /// let a = Matrix::from_vec(2, 2, vec![1, 2, 0, 3]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![4, 5, 6, 7]).unwrap();
    ///
    /// let c = a.multiply(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[16, 19, 18, 21]);
    /// ```
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                left: self.shape(),
                right: other.shape(),
            }
            .logged());
        }

        let n_rows = self.rows();
        let n_inner = self.cols();
        let n_cols = other.cols();

        let mut result = Self::allocate(n_rows, n_cols)?;
        let a = self.as_slice();
        let b = other.as_slice();
        let c = result.as_mut_slice();

        for i in 0..n_rows {
            for j in 0..n_cols {
                let mut acc = T::zero();
                for k in 0..n_inner {
                    acc = acc + a[i * n_inner + k] * b[k * n_cols + j];
                }
                c[i * n_cols + j] = acc;
            }
        }

        Ok(result)
    }
}
