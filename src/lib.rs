//! # dmatrix: dense matrices and small financial projections
//!
//! A dense, row-major matrix value type with the classic coursework
//! operations, plus two fixed-horizon money calculators.
//!
//! ## Overview
//!
//! - **Lifecycle**: [`Matrix::allocate`], [`Matrix::create`] with a
//!   [`FillPattern`], [`Matrix::fill_with_data`] and [`Matrix::free`]
//! - **Arithmetic**: [`Matrix::sum`], [`Matrix::subtract`],
//!   [`Matrix::scalar_multiply`] and [`Matrix::multiply`]
//! - **Structure**: [`Matrix::transpose`], [`Matrix::submatrix`] and
//!   [`Matrix::determinant`] by cofactor expansion
//! - **Projections**: [`projection::mortgage_payment`] and
//!   [`projection::simulate`]
//!
//! Every fallible operation returns a [`Result`] carrying a [`MatrixError`];
//! the empty matrix is an ordinary value, never a failure marker. Failures are
//! also reported through the `log` facade at `warn` level.
//!
//! ## Usage
//!
//! ```
//! use dmatrix::{FillPattern, Matrix};
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let identity = Matrix::<f64>::create(2, 2, FillPattern::Identity).unwrap();
//!
//! let product = identity.multiply(&a).unwrap();
//! assert_eq!(product, a);
//! assert_eq!(a.determinant().unwrap(), -2.0);
//! ```

pub mod matrix;
pub mod projection;
pub mod utils;

// Re-export primary components
pub use matrix::{FillPattern, Matrix, MatrixConfig, MatrixError, Result};
pub use projection::{ProjectionConfig, ProjectionError, ProjectionReport};
pub use utils::{from_ndarray, from_sprs, to_ndarray, to_sprs_csr};

/// Version information for the dmatrix library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
