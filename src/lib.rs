//! Shared helpers for the workspace-level integration tests.

use serde::Deserialize;

use strassen_core::{Element, Matrix, MatrixError};

/// Reference data in `tests/testdata/strassen_golden.json`.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub products: Vec<GoldenProduct>,
    pub triangles: Vec<GoldenGraph>,
}

/// Two operands and their known product.
#[derive(Debug, Deserialize)]
pub struct GoldenProduct {
    pub name: String,
    pub a: Vec<Vec<Element>>,
    pub b: Vec<Vec<Element>>,
    pub product: Vec<Vec<Element>>,
    pub diagonal: Vec<Element>,
}

/// A small graph given as an edge list and its triangle count.
#[derive(Debug, Deserialize)]
pub struct GoldenGraph {
    pub name: String,
    pub vertices: usize,
    pub edges: Vec<[usize; 2]>,
    pub triangles: u64,
}

impl GoldenGraph {
    /// Symmetric 0/1 adjacency matrix of the edge list.
    pub fn adjacency(&self) -> Result<Matrix, MatrixError> {
        let n = self.vertices;
        let mut data = vec![0; n * n];
        for &[u, v] in &self.edges {
            data[u * n + v] = 1;
            data[v * n + u] = 1;
        }
        Matrix::from_vec(n, data)
    }
}

/// Parse golden data from JSON text.
pub fn parse_golden(text: &str) -> serde_json::Result<GoldenData> {
    serde_json::from_str(text)
}

/// Count triangles by checking every vertex triple.
#[must_use]
pub fn brute_force_triangles(adjacency: &Matrix) -> u64 {
    let n = adjacency.dim();
    let edge = |i: usize, j: usize| adjacency.get(i, j).is_some_and(|v| v != 0);
    let mut count = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if !edge(i, j) {
                continue;
            }
            for k in (j + 1)..n {
                if edge(j, k) && edge(i, k) {
                    count += 1;
                }
            }
        }
    }
    count
}
