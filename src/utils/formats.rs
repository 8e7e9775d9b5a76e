//! Utilities for converting between our dense matrix and external libraries

use crate::matrix::{Matrix, Result};
use ndarray::Array2;
use num_traits::Num;
use sprs::CsMat;

/// Converts our dense matrix to an ndarray `Array2`
pub fn to_ndarray<T>(matrix: &Matrix<T>) -> Array2<T>
where
    T: Copy,
{
    Array2::from_shape_fn(matrix.shape(), |(i, j)| matrix[(i, j)])
}

/// Converts an ndarray `Array2` (any memory layout) to our dense matrix
pub fn from_ndarray<T>(array: &Array2<T>) -> Matrix<T>
where
    T: Copy,
{
    let (rows, cols) = array.dim();
    // iter() walks in logical row-major order regardless of strides
    let data = array.iter().copied().collect();
    Matrix::from_raw(rows, cols, data)
}

/// Converts our dense matrix to sprs CsMat format (as CSR), dropping zeros
pub fn to_sprs_csr<T>(matrix: &Matrix<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    let mut indptr = Vec::with_capacity(matrix.rows() + 1);
    let mut indices = Vec::new();
    let mut data = Vec::new();

    indptr.push(0);
    for row in matrix.row_iter() {
        for (j, &value) in row.iter().enumerate() {
            if !value.is_zero() {
                indices.push(j);
                data.push(value);
            }
        }
        indptr.push(indices.len());
    }

    // row_iter() yields nothing for a matrix without columns
    while indptr.len() < matrix.rows() + 1 {
        indptr.push(0);
    }

    CsMat::new(matrix.shape(), indptr, indices, data)
}

/// Converts a sprs CsMat (CSR or CSC) to our dense matrix
///
/// # Errors
///
/// Returns [`MatrixError::Allocation`](crate::MatrixError::Allocation) if the dense shape cannot be
/// allocated, which a sparse matrix can easily describe.
pub fn from_sprs<T>(matrix: &CsMat<T>) -> Result<Matrix<T>>
where
    T: Copy + Num,
{
    let mut dense = Matrix::allocate(matrix.rows(), matrix.cols())?;

    for (&value, (i, j)) in matrix.iter() {
        dense[(i, j)] = value;
    }

    Ok(dense)
}
