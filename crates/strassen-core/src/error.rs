//! Error type shared by the matrix engine and its drivers.

/// Error type for matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Operands of a binary operation have different logical dimensions.
    #[error("dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A flat buffer does not hold `dim * dim` elements.
    #[error("buffer of length {actual} cannot back a {dim}x{dim} matrix (expected {expected})")]
    BufferLength {
        dim: usize,
        expected: usize,
        actual: usize,
    },

    /// A row of nested input has the wrong length.
    #[error("row {row} has {len} entries, expected {dim}")]
    NotSquare { row: usize, len: usize, dim: usize },

    /// Quadrant index outside `0..=3`.
    #[error("invalid quadrant index {0} (expected 0..=3)")]
    InvalidQuadrant(usize),

    /// Strassen and conventional products disagree.
    #[error("product mismatch at ({row}, {col})")]
    Mismatch { row: usize, col: usize },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_message() {
        let err = MatrixError::DimensionMismatch { left: 3, right: 4 };
        assert_eq!(err.to_string(), "dimension mismatch: 3x3 vs 4x4");
    }

    #[test]
    fn buffer_length_message() {
        let err = MatrixError::BufferLength {
            dim: 2,
            expected: 4,
            actual: 3,
        };
        assert!(err.to_string().contains("expected 4"));
    }

    #[test]
    fn mismatch_message_names_cell() {
        let err = MatrixError::Mismatch { row: 1, col: 2 };
        assert_eq!(err.to_string(), "product mismatch at (1, 2)");
    }
}
