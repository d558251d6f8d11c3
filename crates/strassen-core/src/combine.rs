//! Elementwise addition and subtraction of equally sized views.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::view::MatrixView;

/// Whether the second operand is added or subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// Reject operands whose logical dimensions differ.
pub(crate) fn ensure_same_dim(x: &MatrixView<'_>, y: &MatrixView<'_>) -> Result<(), MatrixError> {
    if x.dim() != y.dim() {
        return Err(MatrixError::DimensionMismatch {
            left: x.dim(),
            right: y.dim(),
        });
    }
    Ok(())
}

/// `Z[r, c] = X[r, c] ± Y[r, c]` into a freshly allocated matrix.
///
/// Padding cells of either view contribute zero.
pub fn combine(x: &MatrixView<'_>, y: &MatrixView<'_>, sign: Sign) -> Result<Matrix, MatrixError> {
    ensure_same_dim(x, y)?;
    let dim = x.dim();
    let result = match sign {
        Sign::Plus => Matrix::from_fn(dim, |r, c| x.read(r, c).wrapping_add(y.read(r, c))),
        Sign::Minus => Matrix::from_fn(dim, |r, c| x.read(r, c).wrapping_sub(y.read(r, c))),
    };
    Ok(result)
}

/// `X + Y`.
pub fn add(x: &MatrixView<'_>, y: &MatrixView<'_>) -> Result<Matrix, MatrixError> {
    combine(x, y, Sign::Plus)
}

/// `X - Y`.
pub fn subtract(x: &MatrixView<'_>, y: &MatrixView<'_>) -> Result<Matrix, MatrixError> {
    combine(x, y, Sign::Minus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Quadrant;

    #[test]
    fn add_and_subtract() {
        let x = Matrix::from_rows(&[[1_i64, 2], [3, 4]]).unwrap();
        let y = Matrix::from_rows(&[[10_i64, 20], [30, 40]]).unwrap();
        assert_eq!(add(&x.view(), &y.view()).unwrap().as_slice(), &[11, 22, 33, 44]);
        assert_eq!(
            subtract(&x.view(), &y.view()).unwrap().as_slice(),
            &[-9, -18, -27, -36]
        );
    }

    #[test]
    fn result_is_top_level() {
        let x = Matrix::identity(5);
        let q = x.view().quarter(Quadrant::BottomRight);
        let sum = add(&q, &q).unwrap();
        assert_eq!(sum.dim(), 3);
        let v = sum.view();
        assert_eq!(v.original_dim(), 3);
        assert_eq!((v.row_offset(), v.col_offset()), (0, 0));
    }

    #[test]
    fn padding_reads_zero_in_sum() {
        let x = Matrix::from_rows(&[[1_i64, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
        let b = x.view().quarter(Quadrant::TopRight);
        let d = x.view().quarter(Quadrant::BottomRight);
        let diff = subtract(&b, &d).unwrap();
        assert_eq!(diff.as_slice(), &[-6, 0, 6, 0]);
    }

    #[test]
    fn mismatched_dims_rejected() {
        let x = Matrix::identity(2);
        let y = Matrix::identity(3);
        assert_eq!(
            add(&x.view(), &y.view()).unwrap_err(),
            MatrixError::DimensionMismatch { left: 2, right: 3 }
        );
    }

    #[test]
    fn wraps_instead_of_overflowing() {
        let x = Matrix::from_vec(1, vec![i64::MAX]).unwrap();
        let y = Matrix::from_vec(1, vec![1]).unwrap();
        assert_eq!(add(&x.view(), &y.view()).unwrap().as_slice(), &[i64::MIN]);
    }
}
