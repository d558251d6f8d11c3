//! Triangle counting through the trace of the adjacency cube.
//!
//! `trace(M^3)` counts closed walks of length three. Each triangle yields six
//! of them (three starting vertices, two directions), so the count is
//! `trace(M^3) / 6`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::Serialize;

use strassen_core::{
    Matrix, MatrixError, Multiplier, StrassenMultiplier, DEFAULT_STRASSEN_THRESHOLD,
    DEFAULT_TRIANGLE_TRIALS, DEFAULT_VERTEX_COUNT,
};

use crate::adjacency::{random_adjacency, validate_probability};

/// Exact number of triangles in the graph with this adjacency matrix.
///
/// The cube is formed as `M * (M * M)` with two Strassen products.
pub fn count_triangles(adjacency: &Matrix, threshold: usize) -> Result<u64, MatrixError> {
    let multiplier = StrassenMultiplier::new(threshold);
    let squared = multiplier.square(&adjacency.view())?;
    let cubed = multiplier.multiply(&adjacency.view(), &squared.view())?;
    let closed_walks = u64::try_from(cubed.trace()).map_err(|_| {
        MatrixError::Config("adjacency cube has a negative trace; input is not 0/1".into())
    })?;
    Ok(closed_walks / 6)
}

/// Parameters for a multi-trial triangle estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleConfig {
    /// Vertices per random graph.
    pub vertices: usize,
    /// Independent edge probability.
    pub probability: f64,
    /// Number of independent graphs.
    pub trials: usize,
    /// Strassen base-case threshold.
    pub threshold: usize,
    /// Base seed; trial `t` uses `seed + t`. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTEX_COUNT,
            probability: 0.5,
            trials: DEFAULT_TRIANGLE_TRIALS,
            threshold: DEFAULT_STRASSEN_THRESHOLD,
            seed: None,
        }
    }
}

impl TriangleConfig {
    /// Replace zero-valued sizes with their defaults.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.vertices == 0 {
            self.vertices = DEFAULT_VERTEX_COUNT;
        }
        if self.trials == 0 {
            self.trials = DEFAULT_TRIANGLE_TRIALS;
        }
        if self.threshold == 0 {
            self.threshold = DEFAULT_STRASSEN_THRESHOLD;
        }
        self
    }
}

/// Aggregate of a multi-trial triangle estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriangleEstimate {
    /// Vertices per graph.
    pub vertices: usize,
    /// Edge probability used.
    pub probability: f64,
    /// Base seed the trials were derived from.
    pub seed: u64,
    /// Triangle count of each trial, in trial order.
    pub counts: Vec<u64>,
    /// Mean of `counts`.
    pub mean: f64,
    /// `C(n, 3) * p^3`, the expected count for the random graph model.
    pub expected: f64,
}

/// Expected triangle count of a `G(n, p)` random graph.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn expected_triangles(vertices: usize, probability: f64) -> f64 {
    let n = vertices as f64;
    let triples = if vertices < 3 {
        0.0
    } else {
        n * (n - 1.0) * (n - 2.0) / 6.0
    };
    triples * probability.powi(3)
}

/// Count triangles in `trials` independent random graphs on the rayon pool.
///
/// Every trial owns its generator and returns its count by value; the counts
/// are reduced only after all trials have joined.
#[allow(clippy::cast_precision_loss)]
pub fn estimate_triangles(config: &TriangleConfig) -> Result<TriangleEstimate, MatrixError> {
    let config = config.clone().normalize();
    validate_probability(config.probability)?;
    Matrix::cell_count(config.vertices)?;
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    tracing::debug!(
        vertices = config.vertices,
        probability = config.probability,
        trials = config.trials,
        seed,
        "starting triangle estimate"
    );

    let counts = (0..config.trials)
        .into_par_iter()
        .map(|trial| -> Result<u64, MatrixError> {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(trial as u64));
            let adjacency = random_adjacency(config.vertices, config.probability, &mut rng)?;
            let count = count_triangles(&adjacency, config.threshold)?;
            tracing::debug!(trial, count, "trial complete");
            Ok(count)
        })
        .collect::<Result<Vec<u64>, MatrixError>>()?;

    let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / counts.len() as f64;
    let expected = expected_triangles(config.vertices, config.probability);
    tracing::info!(mean, expected, trials = counts.len(), "triangle estimate");

    Ok(TriangleEstimate {
        vertices: config.vertices,
        probability: config.probability,
        seed,
        counts,
        mean,
        expected,
    })
}
