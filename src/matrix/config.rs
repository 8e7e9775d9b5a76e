//! Configuration for matrix generation and printing

use crate::matrix::error::{MatrixError, Result};

/// Lower bound of the default random fill range
pub const RANDOM_LOW: f64 = -10.0;

/// Upper bound (exclusive) of the default random fill range
pub const RANDOM_HIGH: f64 = 10.0;

/// Digits after the decimal point when rendering matrices
pub const DEFAULT_PRECISION: usize = 2;

/// Settings shared by the fill and formatting routines
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixConfig {
    /// Inclusive lower bound for [`FillPattern::Random`](crate::FillPattern::Random)
    pub random_low: f64,

    /// Exclusive upper bound for random values
    pub random_high: f64,

    /// Seed for the random generator
    /// If None, the generator is seeded from system entropy
    pub seed: Option<u64>,

    /// Digits after the decimal point used by [`Matrix::render`](crate::Matrix::render)
    pub precision: usize,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            random_low: RANDOM_LOW,
            random_high: RANDOM_HIGH,
            seed: None,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl MatrixConfig {
    /// Create a config whose random fills are reproducible
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Replace the random range
    pub fn with_range(mut self, low: f64, high: f64) -> Self {
        self.random_low = low;
        self.random_high = high;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Checks that the random range is finite and non-empty
    pub fn validate(&self) -> Result<()> {
        let (low, high) = (self.random_low, self.random_high);
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(MatrixError::InvalidRange { low, high }.logged());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatrixConfig::default();

        assert_eq!(config.random_low, -10.0);
        assert_eq!(config.random_high, 10.0);
        assert_eq!(config.seed, None);
        assert_eq!(config.precision, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(MatrixConfig::default().with_range(1.0, 1.0).validate().is_err());
        assert!(MatrixConfig::default().with_range(5.0, -5.0).validate().is_err());
        assert!(MatrixConfig::default()
            .with_range(f64::NEG_INFINITY, 0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_seeded() {
        let config = MatrixConfig::seeded(42).with_precision(4);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.precision, 4);
    }
}
