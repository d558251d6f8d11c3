//! Triple-loop matrix multiplication.
//!
//! Serves as the Strassen base case and as the reference the recursive
//! engine is checked against.

use crate::combine::ensure_same_dim;
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::view::MatrixView;

/// `Z[i, j] = sum_k X[i, k] * Y[k, j]` in O(dim^3) time.
///
/// Loops run in i-k-j order so the inner loop walks a row of `Y` and a row
/// of the result.
pub fn multiply_conventional(x: &MatrixView<'_>, y: &MatrixView<'_>) -> Result<Matrix, MatrixError> {
    ensure_same_dim(x, y)?;
    let dim = x.dim();
    let mut z = Matrix::zeros(dim);
    for i in 0..dim {
        let row = z.row_mut(i);
        for k in 0..dim {
            let xik = x.read(i, k);
            if xik == 0 {
                continue;
            }
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = cell.wrapping_add(xik.wrapping_mul(y.read(k, j)));
            }
        }
    }
    Ok(z)
}
