//! Adjacency matrices of simple undirected graphs.

use rand::Rng;

use strassen_core::{Matrix, MatrixError};

/// Adjacency matrix of the complete graph on `vertices` vertices.
#[must_use]
pub fn complete_adjacency(vertices: usize) -> Matrix {
    Matrix::from_fn(vertices, |r, c| i64::from(r != c))
}

/// Erdős–Rényi adjacency matrix: each unordered pair is joined with
/// probability `probability`, independently.
///
/// The result is symmetric with a zero diagonal. `probability` must lie in
/// `[0, 1]`, and `vertices * vertices` cells must be allocatable.
pub fn random_adjacency<R: Rng>(
    vertices: usize,
    probability: f64,
    rng: &mut R,
) -> Result<Matrix, MatrixError> {
    validate_probability(probability)?;
    let cells = Matrix::cell_count(vertices)?;
    let mut data = Vec::new();
    data.try_reserve_exact(cells).map_err(|_| {
        MatrixError::Config(format!("cannot allocate a graph of {vertices} vertices"))
    })?;
    data.resize(cells, 0);
    for i in 0..vertices {
        for j in (i + 1)..vertices {
            if rng.gen_bool(probability) {
                data[i * vertices + j] = 1;
                data[j * vertices + i] = 1;
            }
        }
    }
    Matrix::from_vec(vertices, data)
}

pub(crate) fn validate_probability(probability: f64) -> Result<(), MatrixError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(MatrixError::Config(format!(
            "edge probability must be in [0, 1], got {probability}"
        )));
    }
    Ok(())
}

/// Number of undirected edges in a 0/1 adjacency matrix.
#[must_use]
pub fn edge_count(adjacency: &Matrix) -> usize {
    let ones = adjacency.as_slice().iter().filter(|&&v| v != 0).count();
    ones / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn complete_graph_shape() {
        let m = complete_adjacency(4);
        assert_eq!(m.diagonal(), vec![0, 0, 0, 0]);
        assert_eq!(m.get(0, 3), Some(1));
        assert_eq!(edge_count(&m), 6);
    }

    #[test]
    fn random_graph_is_symmetric_without_loops() {
        let mut rng = StdRng::seed_from_u64(42);
        let m = random_adjacency(30, 0.3, &mut rng).unwrap();
        for i in 0..30 {
            assert_eq!(m.get(i, i), Some(0));
            for j in 0..30 {
                assert_eq!(m.get(i, j), m.get(j, i));
                assert!(matches!(m.get(i, j), Some(0 | 1)));
            }
        }
    }

    #[test]
    fn extreme_probabilities() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_adjacency(6, 1.0, &mut rng).unwrap(), complete_adjacency(6));
        assert_eq!(random_adjacency(6, 0.0, &mut rng).unwrap(), Matrix::zeros(6));
    }

    #[test]
    fn rejects_bad_probability() {
        let mut rng = StdRng::seed_from_u64(1);
        for p in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                random_adjacency(3, p, &mut rng),
                Err(MatrixError::Config(_))
            ));
        }
    }

    #[test]
    fn oversized_graph_is_config_error() {
        let mut rng = StdRng::seed_from_u64(1);
        for vertices in [1_usize << 33, usize::MAX] {
            assert!(matches!(
                random_adjacency(vertices, 0.5, &mut rng),
                Err(MatrixError::Config(_))
            ));
        }
    }

    #[test]
    fn same_seed_same_graph() {
        let a = random_adjacency(20, 0.5, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = random_adjacency(20, 0.5, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }
}
