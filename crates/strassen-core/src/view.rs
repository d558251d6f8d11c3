//! Zero-copy square views over a borrowed row-major buffer.
//!
//! A view addresses a `dim x dim` window starting at `(row_offset, col_offset)`
//! inside a buffer of side `original_dim`. Cells that fall past the edge of the
//! buffer read as zero, which is how odd-sized quarters pad themselves with a
//! phantom row and column without allocating.

use crate::error::MatrixError;
use crate::matrix::{Element, Matrix};

/// One of the four quadrants produced by [`MatrixView::quarter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Quadrant 0.
    TopLeft,
    /// Quadrant 1.
    TopRight,
    /// Quadrant 2.
    BottomLeft,
    /// Quadrant 3.
    BottomRight,
}

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Numeric index in `0..=3`.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomLeft => 2,
            Quadrant::BottomRight => 3,
        }
    }

    fn is_bottom(self) -> bool {
        matches!(self, Quadrant::BottomLeft | Quadrant::BottomRight)
    }

    fn is_right(self) -> bool {
        matches!(self, Quadrant::TopRight | Quadrant::BottomRight)
    }
}

impl TryFrom<usize> for Quadrant {
    type Error = MatrixError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Quadrant::ALL
            .get(index)
            .copied()
            .ok_or(MatrixError::InvalidQuadrant(index))
    }
}

/// Non-owning square window over a matrix buffer.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a> {
    data: &'a [Element],
    original_dim: usize,
    dim: usize,
    row_offset: usize,
    col_offset: usize,
}

impl<'a> MatrixView<'a> {
    /// View covering a whole `original_dim x original_dim` buffer.
    pub(crate) fn new(data: &'a [Element], original_dim: usize) -> Self {
        debug_assert_eq!(data.len(), original_dim * original_dim);
        Self {
            data,
            original_dim,
            dim: original_dim,
            row_offset: 0,
            col_offset: 0,
        }
    }

    /// Logical dimension of the window.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Side of the buffer the view was carved from.
    #[must_use]
    pub fn original_dim(&self) -> usize {
        self.original_dim
    }

    /// Top-left row inside the backing buffer.
    #[must_use]
    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// Top-left column inside the backing buffer.
    #[must_use]
    pub fn col_offset(&self) -> usize {
        self.col_offset
    }

    /// Dimension of each quarter: `ceil(dim / 2)`.
    #[must_use]
    pub fn half(&self) -> usize {
        self.dim.div_ceil(2)
    }

    /// Whether the column just right of the window reads as zero.
    #[must_use]
    pub fn zero_past_right(&self) -> bool {
        self.col_offset + self.dim >= self.original_dim
    }

    /// Whether the row just below the window reads as zero.
    #[must_use]
    pub fn zero_past_bottom(&self) -> bool {
        self.row_offset + self.dim >= self.original_dim
    }

    /// Read cell `(row, col)` of the window.
    ///
    /// Positions past the edge of the backing buffer read as zero.
    #[inline]
    #[must_use]
    pub fn read(&self, row: usize, col: usize) -> Element {
        debug_assert!(row < self.dim && col < self.dim);
        let r = self.row_offset + row;
        let c = self.col_offset + col;
        if r >= self.original_dim || c >= self.original_dim {
            return 0;
        }
        self.data[r * self.original_dim + c]
    }

    /// Zero-copy quadrant of side `ceil(dim / 2)`.
    ///
    /// For odd `dim` the right and bottom quadrants extend one cell past the
    /// window; that phantom row/column reads as zero whenever it also lies
    /// past the buffer edge.
    #[must_use]
    pub fn quarter(&self, quadrant: Quadrant) -> MatrixView<'a> {
        let half = self.half();
        let row_offset = if quadrant.is_bottom() {
            self.row_offset + half
        } else {
            self.row_offset
        };
        let col_offset = if quadrant.is_right() {
            self.col_offset + half
        } else {
            self.col_offset
        };
        MatrixView {
            data: self.data,
            original_dim: self.original_dim,
            dim: half,
            row_offset,
            col_offset,
        }
    }

    /// All four quadrants in index order.
    #[must_use]
    pub fn quarters(&self) -> [MatrixView<'a>; 4] {
        Quadrant::ALL.map(|q| self.quarter(q))
    }

    /// Copy the window (padding included) into an owned matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix {
        Matrix::from_fn(self.dim, |r, c| self.read(r, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(dim: usize) -> Matrix {
        let mut next = 0;
        Matrix::from_fn(dim, |_, _| {
            next += 1;
            next
        })
    }

    #[test]
    fn full_view_reads_buffer() {
        let m = counting(3);
        let v = m.view();
        assert_eq!(v.dim(), 3);
        assert_eq!(v.original_dim(), 3);
        assert_eq!(v.read(0, 0), 1);
        assert_eq!(v.read(2, 1), 8);
    }

    #[test]
    fn even_quarters_tile_the_matrix() {
        let m = counting(4);
        let [a, b, c, d] = m.view().quarters();
        assert_eq!(a.to_matrix().as_slice(), &[1, 2, 5, 6]);
        assert_eq!(b.to_matrix().as_slice(), &[3, 4, 7, 8]);
        assert_eq!(c.to_matrix().as_slice(), &[9, 10, 13, 14]);
        assert_eq!(d.to_matrix().as_slice(), &[11, 12, 15, 16]);
    }

    #[test]
    fn odd_quarters_pad_with_zero() {
        // 1 2 3
        // 4 5 6
        // 7 8 9
        let m = counting(3);
        let v = m.view();
        assert_eq!(v.half(), 2);
        let b = v.quarter(Quadrant::TopRight);
        assert_eq!((b.row_offset(), b.col_offset()), (0, 2));
        assert_eq!(b.to_matrix().as_slice(), &[3, 0, 6, 0]);
        let c = v.quarter(Quadrant::BottomLeft);
        assert_eq!(c.to_matrix().as_slice(), &[7, 8, 0, 0]);
        let d = v.quarter(Quadrant::BottomRight);
        assert_eq!(d.to_matrix().as_slice(), &[9, 0, 0, 0]);
    }

    #[test]
    fn nested_quarters_share_buffer() {
        let m = counting(8);
        let inner = m
            .view()
            .quarter(Quadrant::BottomRight)
            .quarter(Quadrant::TopLeft);
        assert_eq!(inner.dim(), 2);
        assert_eq!(inner.original_dim(), 8);
        assert_eq!((inner.row_offset(), inner.col_offset()), (4, 4));
        assert_eq!(inner.read(0, 0), 37);
        assert_eq!(inner.read(1, 1), 46);
    }

    #[test]
    fn one_by_one_quarters() {
        let m = Matrix::from_vec(1, vec![42]).unwrap();
        let [a, b, c, d] = m.view().quarters();
        assert_eq!(a.read(0, 0), 42);
        assert_eq!(b.read(0, 0), 0);
        assert_eq!(c.read(0, 0), 0);
        assert_eq!(d.read(0, 0), 0);
    }

    #[test]
    fn edge_padding_flags() {
        let m = counting(5);
        let v = m.view();
        assert!(v.zero_past_right() && v.zero_past_bottom());
        let a = v.quarter(Quadrant::TopLeft);
        assert!(!a.zero_past_right() && !a.zero_past_bottom());
        let b = v.quarter(Quadrant::TopRight);
        assert!(b.zero_past_right() && !b.zero_past_bottom());
    }

    #[test]
    fn quadrant_index_round_trip() {
        for q in Quadrant::ALL {
            assert_eq!(Quadrant::try_from(q.index()), Ok(q));
        }
        assert_eq!(
            Quadrant::try_from(4),
            Err(MatrixError::InvalidQuadrant(4))
        );
    }
}
