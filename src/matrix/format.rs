//! Fixed-precision tabular rendering

use std::fmt;

use crate::matrix::config::{MatrixConfig, DEFAULT_PRECISION};
use crate::matrix::dense::Matrix;

impl<T: fmt::Display> Matrix<T> {
    /// Renders the matrix as tab-separated rows using `config.precision`
    pub fn render(&self, config: &MatrixConfig) -> String {
        format!("{:.*}", config.precision, self)
    }
}

/// One line per row, each value followed by a tab. The formatter precision
/// (`{:.3}`) overrides the default of two decimals.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "(empty {}x{} matrix)", self.rows(), self.cols());
        }

        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        for row in self.row_iter() {
            for value in row {
                write!(f, "{:.*} \t", precision, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
