//! Whitespace-separated matrix input.
//!
//! Input is a flat stream of integers: the `dim * dim` entries of the first
//! matrix in row-major order, followed by those of the second. Any whitespace
//! separates values, so line breaks are not significant.

use std::path::{Path, PathBuf};

use strassen_core::{Element, Matrix};

/// Errors raised while reading matrix input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// A token is not a valid 64-bit integer.
    #[error("invalid integer {token:?} at value {position}")]
    InvalidNumber { token: String, position: usize },

    /// The input ends before both matrices are filled.
    #[error("expected {expected} values, found {found}")]
    TooFewValues { expected: usize, found: usize },

    /// `2 * dim * dim` does not fit in memory addressing.
    #[error("dimension {0} is too large")]
    DimensionTooLarge(usize),

    /// The input file cannot be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse two `dim x dim` matrices from whitespace-separated text.
///
/// Values beyond the first `2 * dim * dim` are ignored with a warning.
pub fn parse_matrices(text: &str, dim: usize) -> Result<(Matrix, Matrix), InputError> {
    let cells = dim
        .checked_mul(dim)
        .ok_or(InputError::DimensionTooLarge(dim))?;
    let expected = cells
        .checked_mul(2)
        .ok_or(InputError::DimensionTooLarge(dim))?;

    let mut tokens = text.split_whitespace();
    let mut values: Vec<Element> = Vec::with_capacity(expected.min(1 << 20));
    for (position, token) in tokens.by_ref().take(expected).enumerate() {
        let value = token
            .parse::<Element>()
            .map_err(|_| InputError::InvalidNumber {
                token: token.to_string(),
                position,
            })?;
        values.push(value);
    }
    if values.len() < expected {
        return Err(InputError::TooFewValues {
            expected,
            found: values.len(),
        });
    }

    let surplus = tokens.count();
    if surplus > 0 {
        tracing::warn!(surplus, dim, "ignoring values after the second matrix");
    }

    let second = values.split_off(cells);
    let x = Matrix::from_vec(dim, values).map_err(|_| InputError::DimensionTooLarge(dim))?;
    let y = Matrix::from_vec(dim, second).map_err(|_| InputError::DimensionTooLarge(dim))?;
    Ok((x, y))
}

/// Read and parse two matrices from a file.
pub fn read_matrices(path: &Path, dim: usize) -> Result<(Matrix, Matrix), InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read matrix input");
    parse_matrices(&text, dim)
}
