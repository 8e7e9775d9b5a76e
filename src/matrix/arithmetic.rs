//! Elementwise arithmetic: sum, difference and scalar multiplication

use std::ops::Mul;

use num_traits::Num;

use crate::matrix::dense::Matrix;
use crate::matrix::error::{MatrixError, Result};

impl<T> Matrix<T>
where
    T: Copy + Num,
{
    /// Elementwise sum `A + B`
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless both matrices have
    /// the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use dmatrix::Matrix;
    ///
    /// let a = Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
    /// let b = Matrix::from_vec(1, 3, vec![4.0, 5.0, 6.0]).unwrap();
    ///
    /// let c = a.sum(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[5.0, 7.0, 9.0]);
    /// ```
    pub fn sum(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "sum", |a, b| a + b)
    }

    /// Elementwise difference `A - B`
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Returns a new matrix with every element multiplied by `scalar`
    pub fn scalar_multiply(&self, scalar: T) -> Self {
        self.map(|v| scalar * v)
    }

    /// Applies `f` to every element, keeping the shape
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        let data = self.as_slice().iter().map(|&v| f(v)).collect();
        Self::from_raw(self.rows(), self.cols(), data)
    }

    fn zip_with<F>(&self, other: &Self, op: &'static str, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            }
            .logged());
        }

        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(&a, &b)| f(a, b))
            .collect();

        Ok(Self::from_raw(self.rows(), self.cols(), data))
    }
}

impl<T> Mul<T> for &Matrix<T>
where
    T: Copy + Num,
{
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.scalar_multiply(scalar)
    }
}
