// Dense matrix data structure and operations

pub mod arithmetic;
pub mod config;
pub mod dense;
pub mod determinant;
pub mod error;
pub mod fill;
pub mod format;
pub mod multiply;
pub mod transpose;

pub use config::MatrixConfig;
pub use dense::Matrix;
pub use error::{MatrixError, Result};
pub use fill::FillPattern;
