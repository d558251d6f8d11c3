//! Recursive Strassen multiplication over zero-copy views.
//!
//! Each level splits both operands into quarters of side `ceil(dim / 2)`,
//! forms seven recursive products and reassembles them into a fresh
//! `dim x dim` matrix. Odd dimensions are handled by the views' implicit zero
//! padding; the phantom row and column of the padded product are never
//! written back.

use crate::combine::{add, ensure_same_dim, subtract};
use crate::constants::DEFAULT_STRASSEN_THRESHOLD;
use crate::conventional::multiply_conventional;
use crate::error::MatrixError;
use crate::matrix::{Element, Matrix};
use crate::view::MatrixView;

/// Strassen product with the default base-case threshold.
pub fn multiply_strassen(x: &MatrixView<'_>, y: &MatrixView<'_>) -> Result<Matrix, MatrixError> {
    multiply_strassen_threshold(x, y, DEFAULT_STRASSEN_THRESHOLD)
}

/// Strassen product that falls back to the triple loop once `dim <= threshold`.
///
/// A threshold of zero is treated as one, so the recursion always bottoms out.
pub fn multiply_strassen_threshold(
    x: &MatrixView<'_>,
    y: &MatrixView<'_>,
    threshold: usize,
) -> Result<Matrix, MatrixError> {
    ensure_same_dim(x, y)?;
    tracing::trace!(dim = x.dim(), threshold, "strassen multiply");
    let threshold = threshold.max(1);

    // Only the outermost level can pair two windows whose padding reads live
    // neighbouring cells; every recursive product has a freshly allocated
    // operand whose padding is genuinely zero.
    if x.dim() <= threshold
        || x.dim() % 2 == 0
        || x.zero_past_right()
        || y.zero_past_bottom()
    {
        return recurse(x, y, threshold);
    }
    let detached = x.to_matrix();
    recurse(&detached.view(), y, threshold)
}

fn recurse(x: &MatrixView<'_>, y: &MatrixView<'_>, threshold: usize) -> Result<Matrix, MatrixError> {
    if x.dim() <= threshold {
        return multiply_conventional(x, y);
    }

    let [a, b, c, d] = x.quarters();
    let [e, f, g, h] = y.quarters();

    let products = Products {
        p1: recurse(&a, &subtract(&f, &h)?.view(), threshold)?,
        p2: recurse(&add(&a, &b)?.view(), &h, threshold)?,
        p3: recurse(&add(&c, &d)?.view(), &e, threshold)?,
        p4: recurse(&d, &subtract(&g, &e)?.view(), threshold)?,
        p5: recurse(&add(&a, &d)?.view(), &add(&e, &h)?.view(), threshold)?,
        p6: recurse(&subtract(&b, &d)?.view(), &add(&g, &h)?.view(), threshold)?,
        p7: recurse(&subtract(&c, &a)?.view(), &add(&e, &f)?.view(), threshold)?,
    };

    Ok(products.reassemble(x.dim(), x.half()))
}

/// The seven Strassen products of one recursion level, each `half x half`.
struct Products {
    p1: Matrix,
    p2: Matrix,
    p3: Matrix,
    p4: Matrix,
    p5: Matrix,
    p6: Matrix,
    p7: Matrix,
}

impl Products {
    /// `Q1 = P4 + P5 - P2 + P6`
    fn top_left(&self, i: usize, j: usize) -> Element {
        self.p4
            .at(i, j)
            .wrapping_add(self.p5.at(i, j))
            .wrapping_sub(self.p2.at(i, j))
            .wrapping_add(self.p6.at(i, j))
    }

    /// `Q2 = P1 + P2`
    fn top_right(&self, i: usize, j: usize) -> Element {
        self.p1.at(i, j).wrapping_add(self.p2.at(i, j))
    }

    /// `Q3 = P3 + P4`
    fn bottom_left(&self, i: usize, j: usize) -> Element {
        self.p3.at(i, j).wrapping_add(self.p4.at(i, j))
    }

    /// `Q4 = P1 + P5 - P3 + P7`
    fn bottom_right(&self, i: usize, j: usize) -> Element {
        self.p1
            .at(i, j)
            .wrapping_add(self.p5.at(i, j))
            .wrapping_sub(self.p3.at(i, j))
            .wrapping_add(self.p7.at(i, j))
    }

    /// Write the four result quarters into a fresh `dim x dim` matrix.
    ///
    /// When `dim` is odd the right and bottom quarters carry one phantom
    /// column/row (`dim - half == half - 1`); those cells are skipped.
    fn reassemble(&self, dim: usize, half: usize) -> Matrix {
        let rest = dim - half;
        let mut z = Matrix::zeros(dim);
        for i in 0..half {
            for j in 0..half {
                z.set(i, j, self.top_left(i, j));
            }
            for j in 0..rest {
                z.set(i, half + j, self.top_right(i, j));
            }
        }
        for i in 0..rest {
            for j in 0..half {
                z.set(half + i, j, self.bottom_left(i, j));
            }
            for j in 0..rest {
                z.set(half + i, half + j, self.bottom_right(i, j));
            }
        }
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn random_pair(dim: usize, seed: u64) -> (Matrix, Matrix) {
        let mut rng = StdRng::seed_from_u64(seed);
        (
            Matrix::random(dim, -9..=9, &mut rng).unwrap(),
            Matrix::random(dim, -9..=9, &mut rng).unwrap(),
        )
    }

    #[test]
    fn two_by_two_fully_recursive() {
        let a = Matrix::from_rows(&[[1_i64, 2], [3, 4]]).unwrap();
        let b = Matrix::from_rows(&[[5_i64, 6], [7, 8]]).unwrap();
        let c = multiply_strassen_threshold(&a.view(), &b.view(), 1).unwrap();
        assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
        assert_eq!(c.diagonal(), vec![19, 50]);
    }

    #[test]
    fn matches_conventional_across_dims_and_thresholds() {
        for dim in [1, 2, 3, 4, 5, 6, 7, 8, 9, 12, 15, 16, 17, 20] {
            let (a, b) = random_pair(dim, dim as u64);
            let expected = multiply_conventional(&a.view(), &b.view()).unwrap();
            for threshold in 1..=dim {
                let got = multiply_strassen_threshold(&a.view(), &b.view(), threshold).unwrap();
                assert_eq!(got, expected, "dim={dim} threshold={threshold}");
            }
        }
    }

    #[test]
    fn odd_dims_with_full_recursion() {
        for dim in [1, 3, 5, 7, 9, 11, 13, 15, 17, 31, 33] {
            let (a, b) = random_pair(dim, 100 + dim as u64);
            let expected = multiply_conventional(&a.view(), &b.view()).unwrap();
            let got = multiply_strassen_threshold(&a.view(), &b.view(), 1).unwrap();
            assert_eq!(got, expected, "dim={dim}");
        }
    }

    #[test]
    fn zero_threshold_terminates() {
        let (a, b) = random_pair(6, 3);
        let expected = multiply_conventional(&a.view(), &b.view()).unwrap();
        assert_eq!(multiply_strassen_threshold(&a.view(), &b.view(), 0).unwrap(), expected);
    }

    #[test]
    fn default_threshold_large_odd() {
        let (a, b) = random_pair(37, 11);
        let expected = multiply_conventional(&a.view(), &b.view()).unwrap();
        assert_eq!(multiply_strassen(&a.view(), &b.view()).unwrap(), expected);
    }

    #[test]
    fn zero_matrix_annihilates() {
        let (a, _) = random_pair(10, 5);
        let zero = Matrix::zeros(10);
        let got = multiply_strassen_threshold(&a.view(), &zero.view(), 2).unwrap();
        assert_eq!(got, zero);
    }

    #[test]
    fn operands_may_be_quarter_views() {
        let (a, b) = random_pair(11, 21);
        let qa = a.view().quarter(crate::view::Quadrant::TopLeft);
        let qb = b.view().quarter(crate::view::Quadrant::BottomRight);
        let expected = multiply_conventional(&qa, &qb).unwrap();
        assert_eq!(multiply_strassen_threshold(&qa, &qb, 1).unwrap(), expected);
    }

    #[test]
    fn interior_odd_views_are_detached() {
        let (a, b) = random_pair(10, 8);
        let qa = a.view().quarter(crate::view::Quadrant::TopLeft);
        let qb = b.view().quarter(crate::view::Quadrant::TopLeft);
        assert_eq!(qa.dim(), 5);
        assert!(!qa.zero_past_right());
        assert!(!qb.zero_past_bottom());
        let expected = multiply_conventional(&qa, &qb).unwrap();
        for threshold in 1..=4 {
            assert_eq!(
                multiply_strassen_threshold(&qa, &qb, threshold).unwrap(),
                expected,
                "threshold={threshold}"
            );
        }
    }

    #[test]
    fn rejects_mismatched_dims() {
        let a = Matrix::identity(4);
        let b = Matrix::identity(5);
        assert_eq!(
            multiply_strassen(&a.view(), &b.view()).unwrap_err(),
            MatrixError::DimensionMismatch { left: 4, right: 5 }
        );
    }
}
