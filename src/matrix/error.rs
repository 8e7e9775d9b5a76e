//! Error kinds reported by matrix operations

use thiserror::Error;

/// Shape of a matrix as `(rows, cols)`
pub type Shape = (usize, usize);

/// All errors that can occur while building or combining matrices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("memory allocation failed for a {rows}x{cols} matrix")]
    Allocation { rows: usize, cols: usize },

    #[error("wrong number of columns or rows in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("cannot copy {actual} values into a matrix of {expected} elements")]
    DataLength { expected: usize, actual: usize },

    #[error("index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid random range [{low}, {high})")]
    InvalidRange { low: f64, high: f64 },

    #[error("value {value} cannot be represented by the element type")]
    Unrepresentable { value: f64 },
}

impl MatrixError {
    /// Emits the error on the `warn` channel and hands it back, so failure
    /// sites can log and return in one expression.
    pub(crate) fn logged(self) -> Self {
        log::warn!("{}", self);
        self
    }
}

/// Result alias for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MatrixError::DimensionMismatch {
            op: "sum",
            left: (2, 3),
            right: (3, 2),
        };
        assert_eq!(
            err.to_string(),
            "wrong number of columns or rows in sum: (2, 3) vs (3, 2)"
        );

        let err = MatrixError::NotSquare { rows: 2, cols: 4 };
        assert_eq!(err.to_string(), "matrix must be square, got 2x4");
    }

    #[test]
    fn test_logged_returns_same_error() {
        let err = MatrixError::Allocation { rows: 1, cols: 1 };
        assert_eq!(err.clone().logged(), err);
    }
}
