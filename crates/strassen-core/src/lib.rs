//! # strassen-core
//!
//! Core library for Strassen-rs: square integer matrices, zero-copy quarter
//! views, and the conventional and recursive Strassen multipliers.

pub mod combine;
pub mod constants;
pub mod conventional;
pub mod error;
pub mod matrix;
pub mod strassen;
pub mod strategy;
pub mod view;

// Re-exports
pub use combine::{add, combine, subtract, Sign};
pub use constants::{
    exit_codes, DEFAULT_SEARCH_MAX_THRESHOLD, DEFAULT_SEARCH_MIN_THRESHOLD, DEFAULT_SEARCH_STEP,
    DEFAULT_SEARCH_TRIALS, DEFAULT_STRASSEN_THRESHOLD, DEFAULT_TRIANGLE_TRIALS,
    DEFAULT_VERTEX_COUNT,
};
pub use conventional::multiply_conventional;
pub use error::MatrixError;
pub use matrix::{Element, Matrix};
pub use strassen::{multiply_strassen, multiply_strassen_threshold};
pub use strategy::{
    cross_validate, multiplier_by_name, ConventionalMultiplier, Multiplier, StrassenMultiplier,
};
pub use view::{MatrixView, Quadrant};

/// Multiply two owned matrices with the default Strassen threshold.
///
/// This is a convenience wrapper; use [`multiply_strassen_threshold`] or a
/// [`Multiplier`] to pick the base case.
///
/// # Example
/// ```
/// use strassen_core::{multiply, Matrix};
///
/// let a = Matrix::from_rows(&[[1_i64, 2], [3, 4]]).unwrap();
/// let b = Matrix::from_rows(&[[5_i64, 6], [7, 8]]).unwrap();
/// assert_eq!(multiply(&a, &b).unwrap().diagonal(), vec![19, 50]);
/// ```
pub fn multiply(x: &Matrix, y: &Matrix) -> Result<Matrix, MatrixError> {
    multiply_strassen(&x.view(), &y.view())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convenience_multiply() {
        let a = Matrix::identity(5);
        let b = Matrix::from_fn(5, |r, c| (r + c) as i64);
        assert_eq!(multiply(&a, &b).unwrap(), b);
    }
}
