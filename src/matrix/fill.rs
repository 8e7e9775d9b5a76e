//! Fill patterns for freshly allocated matrices

use num_traits::{Num, NumCast};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::matrix::config::MatrixConfig;
use crate::matrix::dense::Matrix;
use crate::matrix::error::{MatrixError, Result};

/// How to initialise the elements of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPattern {
    /// Every element is zero
    Zeros,
    /// Every element is one
    Ones,
    /// Ones on the diagonal, zeros elsewhere (square matrices only)
    Identity,
    /// Uniform samples from the configured range, drawn natively in the
    /// element type (integer types take the bounds truncated toward zero)
    Random,
    /// Sequential values 1, 2, 3, ... in row-major order; fails if
    /// `rows * cols` does not fit the element type
    Raising,
}

impl<T> Matrix<T>
where
    T: Copy + Num + NumCast + PartialOrd + SampleUniform,
{
    /// Allocates a matrix and fills it with `pattern` using the default config
    ///
    /// # Examples
    ///
    /// ```
    /// use dmatrix::{FillPattern, Matrix};
    ///
    /// let m = Matrix::<f64>::create(2, 3, FillPattern::Raising).unwrap();
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    ///
    /// assert!(Matrix::<f64>::create(2, 3, FillPattern::Identity).is_err());
    /// ```
    pub fn create(rows: usize, cols: usize, pattern: FillPattern) -> Result<Self> {
        Self::create_with(rows, cols, pattern, &MatrixConfig::default())
    }

    /// Allocates a matrix and fills it with `pattern`
    pub fn create_with(
        rows: usize,
        cols: usize,
        pattern: FillPattern,
        config: &MatrixConfig,
    ) -> Result<Self> {
        // Reject a non-square identity before paying for the buffer
        if pattern == FillPattern::Identity && rows != cols {
            return Err(MatrixError::NotSquare { rows, cols }.logged());
        }

        let mut matrix = Self::allocate(rows, cols)?;
        matrix.fill_with(pattern, config)?;
        Ok(matrix)
    }

    /// Overwrites every element according to `pattern` using the default config
    pub fn fill(&mut self, pattern: FillPattern) -> Result<()> {
        self.fill_with(pattern, &MatrixConfig::default())
    }

    /// Overwrites every element according to `pattern`
    ///
    /// On error the matrix is left untouched.
    pub fn fill_with(&mut self, pattern: FillPattern, config: &MatrixConfig) -> Result<()> {
        match pattern {
            FillPattern::Zeros => self.as_mut_slice().iter_mut().for_each(|v| *v = T::zero()),
            FillPattern::Ones => self.as_mut_slice().iter_mut().for_each(|v| *v = T::one()),
            FillPattern::Identity => {
                if !self.is_square() {
                    return Err(MatrixError::NotSquare {
                        rows: self.rows(),
                        cols: self.cols(),
                    }
                    .logged());
                }
                let n = self.rows();
                for i in 0..n {
                    for j in 0..n {
                        self[(i, j)] = if i == j { T::one() } else { T::zero() };
                    }
                }
            }
            FillPattern::Random => {
                let range = uniform_range::<T>(config)?;
                let mut rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                for v in self.as_mut_slice() {
                    *v = range.sample(&mut rng);
                }
            }
            FillPattern::Raising => {
                let last = self.len();
                if last > 0 && <T as NumCast>::from(last).is_none() {
                    return Err(MatrixError::Unrepresentable { value: last as f64 }.logged());
                }
                // Increment before writing so the last value never overflows
                let mut next = T::zero();
                for v in self.as_mut_slice() {
                    next = next + T::one();
                    *v = next;
                }
            }
        }
        Ok(())
    }

    /// Copies a caller-supplied row-major buffer into the matrix
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DataLength`] if `values` does not hold exactly
    /// `rows * cols` elements.
    pub fn fill_with_data(&mut self, values: &[T]) -> Result<()> {
        if values.len() != self.len() {
            return Err(MatrixError::DataLength {
                expected: self.len(),
                actual: values.len(),
            }
            .logged());
        }
        self.as_mut_slice().copy_from_slice(values);
        Ok(())
    }
}

/// Converts the configured f64 range into a sampler over `T`
fn uniform_range<T>(config: &MatrixConfig) -> Result<Uniform<T>>
where
    T: Copy + NumCast + PartialOrd + SampleUniform,
{
    config.validate()?;

    let (low, high) = (config.random_low, config.random_high);
    let bound = |value: f64| {
        <T as NumCast>::from(value).ok_or_else(|| MatrixError::Unrepresentable { value }.logged())
    };
    let (low_t, high_t) = (bound(low)?, bound(high)?);

    // Truncation can collapse a narrow range, e.g. [0.2, 0.8) for integers
    if low_t >= high_t {
        return Err(MatrixError::InvalidRange { low, high }.logged());
    }
    Ok(Uniform::new(low_t, high_t))
}
