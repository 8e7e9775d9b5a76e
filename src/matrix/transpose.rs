//! Transposition, copying and in place

use crate::matrix::dense::Matrix;

impl<T> Matrix<T>
where
    T: Copy,
{
    /// Returns a new `cols × rows` matrix with `t[j][i] = m[i][j]`
    pub fn transpose(&self) -> Self {
        let (rows, cols) = self.shape();
        let src = self.as_slice();

        let mut data = Vec::with_capacity(src.len());
        for j in 0..cols {
            for i in 0..rows {
                data.push(src[i * cols + j]);
            }
        }

        Self::from_raw(cols, rows, data)
    }

    /// Transposes the matrix in place
    ///
    /// Square matrices swap elements across the diagonal. Any other shape
    /// needs a different storage layout, so the buffer is rebuilt.
    pub fn transpose_in_place(&mut self) {
        if self.is_square() {
            let n = self.rows();
            let data = self.as_mut_slice();
            for i in 0..n {
                for j in (i + 1)..n {
                    data.swap(i * n + j, j * n + i);
                }
            }
        } else {
            *self = self.transpose();
        }
    }
}
