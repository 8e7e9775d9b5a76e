//! Utility functions and helpers

pub mod formats;

pub use formats::{from_ndarray, from_sprs, to_ndarray, to_sprs_csr};
