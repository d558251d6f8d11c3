//! Multiplication strategy trait and implementations.
//!
//! `Multiplier` is the narrow interface the drivers program against, so the
//! triangle counter and the binary can switch engines without caring which
//! one runs underneath.

use std::sync::Arc;

use crate::constants::DEFAULT_STRASSEN_THRESHOLD;
use crate::conventional::multiply_conventional;
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::strassen::multiply_strassen_threshold;
use crate::view::MatrixView;

/// Narrow interface for square matrix multiplication.
pub trait Multiplier: Send + Sync {
    /// Multiply two views of equal dimension.
    fn multiply(&self, x: &MatrixView<'_>, y: &MatrixView<'_>) -> Result<Matrix, MatrixError>;

    /// Square a view.
    fn square(&self, x: &MatrixView<'_>) -> Result<Matrix, MatrixError> {
        self.multiply(x, x)
    }

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}

/// Triple-loop multiplication.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionalMultiplier;

impl ConventionalMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Multiplier for ConventionalMultiplier {
    fn multiply(&self, x: &MatrixView<'_>, y: &MatrixView<'_>) -> Result<Matrix, MatrixError> {
        multiply_conventional(x, y)
    }

    fn name(&self) -> &'static str {
        "Conventional"
    }
}

/// Recursive Strassen multiplication with a fixed base-case threshold.
#[derive(Debug, Clone, Copy)]
pub struct StrassenMultiplier {
    threshold: usize,
}

impl StrassenMultiplier {
    /// Create a multiplier; a threshold of 0 selects the default.
    #[must_use]
    pub fn new(threshold: usize) -> Self {
        let threshold = if threshold == 0 {
            DEFAULT_STRASSEN_THRESHOLD
        } else {
            threshold
        };
        Self { threshold }
    }

    /// Base-case dimension.
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for StrassenMultiplier {
    fn default() -> Self {
        Self::new(DEFAULT_STRASSEN_THRESHOLD)
    }
}

impl Multiplier for StrassenMultiplier {
    fn multiply(&self, x: &MatrixView<'_>, y: &MatrixView<'_>) -> Result<Matrix, MatrixError> {
        multiply_strassen_threshold(x, y, self.threshold)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}

/// Look up a multiplier by name (case-insensitive).
///
/// Accepts `strassen`, `conventional` and its alias `naive`.
pub fn multiplier_by_name(name: &str, threshold: usize) -> Result<Arc<dyn Multiplier>, MatrixError> {
    match name.to_ascii_lowercase().as_str() {
        "strassen" => Ok(Arc::new(StrassenMultiplier::new(threshold))),
        "conventional" | "naive" => Ok(Arc::new(ConventionalMultiplier::new())),
        other => Err(MatrixError::Config(format!("unknown multiplier: {other}"))),
    }
}

/// Multiply with both engines and return the Strassen product if they agree.
///
/// Disagreement reports the first differing cell in row-major order.
pub fn cross_validate(
    x: &MatrixView<'_>,
    y: &MatrixView<'_>,
    threshold: usize,
) -> Result<Matrix, MatrixError> {
    let fast = StrassenMultiplier::new(threshold).multiply(x, y)?;
    let reference = ConventionalMultiplier.multiply(x, y)?;
    let dim = fast.dim();
    if let Some(index) = fast
        .as_slice()
        .iter()
        .zip(reference.as_slice())
        .position(|(a, b)| a != b)
    {
        let (row, col) = (index / dim, index % dim);
        tracing::debug!(row, col, dim, "strassen and conventional products differ");
        return Err(MatrixError::Mismatch { row, col });
    }
    Ok(fast)
}
