//! Owned square matrices.
//!
//! A `Matrix` is the only type that owns a backing buffer. Every view carved
//! from it borrows the buffer, so the borrow checker guarantees the buffer is
//! released exactly once, after the last view derived from it is gone.

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::MatrixError;
use crate::view::MatrixView;

/// Scalar type of every matrix cell.
pub type Element = i64;

/// Square `dim x dim` matrix stored row-major in an owned buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix {
    dim: usize,
    data: Vec<Element>,
}

impl Matrix {
    /// Number of cells in a `dim x dim` matrix, or a `Config` error when it
    /// does not fit in `usize`.
    pub fn cell_count(dim: usize) -> Result<usize, MatrixError> {
        dim.checked_mul(dim)
            .ok_or_else(|| MatrixError::Config(format!("dimension {dim} is too large")))
    }

    /// All-zero matrix.
    ///
    /// # Panics
    ///
    /// Panics if `dim * dim` cells cannot be allocated.
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![0; dim.saturating_mul(dim)],
        }
    }

    /// Identity matrix.
    #[must_use]
    pub fn identity(dim: usize) -> Self {
        Self::from_fn(dim, |r, c| Element::from(r == c))
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell.
    ///
    /// # Panics
    ///
    /// Panics if `dim * dim` cells cannot be allocated.
    #[must_use]
    pub fn from_fn<F>(dim: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Element,
    {
        let mut data = Vec::with_capacity(dim.saturating_mul(dim));
        for r in 0..dim {
            for c in 0..dim {
                data.push(f(r, c));
            }
        }
        Self { dim, data }
    }

    /// Wrap a row-major buffer of `dim * dim` elements.
    pub fn from_vec(dim: usize, data: Vec<Element>) -> Result<Self, MatrixError> {
        let expected = Self::cell_count(dim)?;
        if data.len() != expected {
            return Err(MatrixError::BufferLength {
                dim,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { dim, data })
    }

    /// Build a matrix from nested rows; the row count fixes the dimension.
    pub fn from_rows<R: AsRef<[Element]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim.saturating_mul(dim));
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != dim {
                return Err(MatrixError::NotSquare {
                    row,
                    len: values.len(),
                    dim,
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self { dim, data })
    }

    /// Matrix with every cell drawn uniformly from `range`.
    pub fn random<R: Rng>(
        dim: usize,
        range: RangeInclusive<Element>,
        rng: &mut R,
    ) -> Result<Self, MatrixError> {
        if range.is_empty() {
            return Err(MatrixError::Config(format!(
                "empty value range {}..={}",
                range.start(),
                range.end()
            )));
        }
        Self::cell_count(dim)?;
        Ok(Self::from_fn(dim, |_, _| rng.gen_range(range.clone())))
    }

    /// Logical dimension.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Cell value, or `None` outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Element> {
        if row >= self.dim || col >= self.dim {
            return None;
        }
        Some(self.data[row * self.dim + col])
    }

    /// Write a cell. Callers only ever address cells inside the matrix.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Element) {
        debug_assert!(
            row < self.dim && col < self.dim,
            "write to ({row}, {col}) outside a {0}x{0} matrix",
            self.dim
        );
        self.data[row * self.dim + col] = value;
    }

    /// Cell read for indices already known to be in range.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Element {
        self.data[row * self.dim + col]
    }

    /// Mutable row slice.
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [Element] {
        let start = row * self.dim;
        &mut self.data[start..start + self.dim]
    }

    /// Row-major backing buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Element]> {
        self.data.chunks(self.dim.max(1))
    }

    /// Diagonal entries, top-left to bottom-right.
    #[must_use]
    pub fn diagonal(&self) -> Vec<Element> {
        (0..self.dim).map(|i| self.data[i * self.dim + i]).collect()
    }

    /// Sum of the diagonal.
    #[must_use]
    pub fn trace(&self) -> Element {
        (0..self.dim).fold(0, |acc: Element, i| {
            acc.wrapping_add(self.data[i * self.dim + i])
        })
    }

    /// Full-size view over this matrix.
    #[must_use]
    pub fn view(&self) -> MatrixView<'_> {
        MatrixView::new(&self.data, self.dim)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for value in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
                first = false;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
