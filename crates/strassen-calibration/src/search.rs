//! Empirical search for the fastest Strassen base-case threshold.

use strassen_core::{
    multiply_strassen_threshold, Matrix, MatrixError, DEFAULT_SEARCH_MAX_THRESHOLD,
    DEFAULT_SEARCH_MIN_THRESHOLD, DEFAULT_SEARCH_STEP, DEFAULT_SEARCH_TRIALS,
};

use crate::profile::{self, SearchReport, ThresholdTiming};
use crate::runner;

/// Range of thresholds to try and trials per threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub min_threshold: usize,
    pub max_threshold: usize,
    pub step: usize,
    pub trials: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_threshold: DEFAULT_SEARCH_MIN_THRESHOLD,
            max_threshold: DEFAULT_SEARCH_MAX_THRESHOLD,
            step: DEFAULT_SEARCH_STEP,
            trials: DEFAULT_SEARCH_TRIALS,
        }
    }
}

impl SearchConfig {
    /// Check the range is non-empty and every count is positive.
    pub fn validate(&self) -> Result<(), MatrixError> {
        if self.min_threshold == 0 {
            return Err(MatrixError::Config("minimum threshold must be at least 1".into()));
        }
        if self.min_threshold > self.max_threshold {
            return Err(MatrixError::Config(format!(
                "minimum threshold {} exceeds maximum {}",
                self.min_threshold, self.max_threshold
            )));
        }
        if self.step == 0 {
            return Err(MatrixError::Config("threshold step must be at least 1".into()));
        }
        if self.trials == 0 {
            return Err(MatrixError::Config("trial count must be at least 1".into()));
        }
        Ok(())
    }

    /// Candidate thresholds in ascending order.
    pub fn thresholds(&self) -> impl Iterator<Item = usize> {
        (self.min_threshold..=self.max_threshold).step_by(self.step.max(1))
    }
}

/// Progress callback for the threshold search.
pub type ProgressCallback = Box<dyn Fn(SearchProgress) + Send>;

/// Progress information reported after each threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    /// Threshold that just finished.
    pub threshold: usize,
    /// Thresholds completed so far (1-based).
    pub current: usize,
    /// Total number of thresholds.
    pub total: usize,
}

/// Times Strassen multiplication across a range of thresholds.
pub struct ThresholdSearch {
    config: SearchConfig,
    progress_cb: Option<ProgressCallback>,
}

impl ThresholdSearch {
    /// Create a search over `config`.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            progress_cb: None,
        }
    }

    /// Set a progress callback.
    #[must_use]
    pub fn with_progress(mut self, cb: ProgressCallback) -> Self {
        self.progress_cb = Some(cb);
        self
    }

    /// Search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn report_progress(&self, threshold: usize, current: usize, total: usize) {
        if let Some(cb) = &self.progress_cb {
            cb(SearchProgress {
                threshold,
                current,
                total,
            });
        }
    }

    /// Time `x * y` at every threshold and pick the fastest mean.
    ///
    /// Each threshold's trials run in parallel; thresholds themselves run one
    /// after another so their timings do not compete for cores. Ties go to the
    /// smaller threshold.
    pub fn run(&self, x: &Matrix, y: &Matrix) -> Result<SearchReport, MatrixError> {
        self.config.validate()?;
        if x.dim() != y.dim() {
            return Err(MatrixError::DimensionMismatch {
                left: x.dim(),
                right: y.dim(),
            });
        }

        let thresholds: Vec<usize> = self.config.thresholds().collect();
        let total = thresholds.len();
        let mut timings = Vec::with_capacity(total);

        for (i, &threshold) in thresholds.iter().enumerate() {
            let summary = runner::time_parallel(self.config.trials, || {
                multiply_strassen_threshold(&x.view(), &y.view(), threshold)
            })?;
            let timing = ThresholdTiming::from_summary(threshold, &summary);
            tracing::debug!(threshold, mean_secs = timing.mean_secs, "threshold timed");
            timings.push(timing);
            self.report_progress(threshold, i + 1, total);
        }

        let (best_threshold, best_mean_secs) = best_of(&timings);
        tracing::info!(best_threshold, best_mean_secs, dim = x.dim(), "threshold search complete");

        Ok(SearchReport {
            dimension: x.dim(),
            trials: self.config.trials,
            timings,
            best_threshold,
            best_mean_secs,
            cpu_model: profile::cpu_model(),
            num_cores: profile::num_cores(),
            timestamp: profile::current_timestamp(),
        })
    }
}

/// Argmin of the means; the earliest (smallest) threshold wins ties.
fn best_of(timings: &[ThresholdTiming]) -> (usize, f64) {
    let mut best: Option<&ThresholdTiming> = None;
    for timing in timings {
        match best {
            Some(b) if timing.mean_secs >= b.mean_secs => {}
            _ => best = Some(timing),
        }
    }
    best.map_or((0, 0.0), |b| (b.threshold, b.mean_secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn timing(threshold: usize, mean_secs: f64) -> ThresholdTiming {
        ThresholdTiming {
            threshold,
            mean_secs,
            median_secs: mean_secs,
            min_secs: mean_secs,
            max_secs: mean_secs,
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn invalid_configs() {
        let base = SearchConfig::default();
        for bad in [
            SearchConfig { min_threshold: 0, ..base },
            SearchConfig { min_threshold: 10, max_threshold: 5, ..base },
            SearchConfig { step: 0, ..base },
            SearchConfig { trials: 0, ..base },
        ] {
            assert!(matches!(bad.validate(), Err(MatrixError::Config(_))), "{bad:?}");
        }
    }

    #[test]
    fn thresholds_step_through_range() {
        let config = SearchConfig {
            min_threshold: 2,
            max_threshold: 9,
            step: 3,
            trials: 1,
        };
        assert_eq!(config.thresholds().collect::<Vec<_>>(), vec![2, 5, 8]);
    }

    #[test]
    fn best_is_argmin_with_ties_to_smaller() {
        let timings = [timing(2, 0.3), timing(4, 0.1), timing(6, 0.1), timing(8, 0.2)];
        assert_eq!(best_of(&timings), (4, 0.1));
        assert_eq!(best_of(&[]), (0, 0.0));
    }

    #[test]
    fn search_covers_every_threshold() {
        let x = Matrix::from_fn(12, |r, c| (r as i64) - (c as i64));
        let y = Matrix::identity(12);
        let config = SearchConfig {
            min_threshold: 1,
            max_threshold: 13,
            step: 4,
            trials: 2,
        };
        let report = ThresholdSearch::new(config).run(&x, &y).unwrap();
        let seen: Vec<usize> = report.timings.iter().map(|t| t.threshold).collect();
        assert_eq!(seen, vec![1, 5, 9, 13]);
        assert!(report.timings.iter().all(|t| t.mean_secs >= 0.0));
        let min = report
            .timings
            .iter()
            .map(|t| t.mean_secs)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(report.best_mean_secs, min);
        assert_eq!(report.timing_for(report.best_threshold).map(|t| t.mean_secs), Some(min));
        assert_eq!(report.dimension, 12);
        assert_eq!(report.trials, 2);
    }

    #[test]
    fn progress_is_reported_per_threshold() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let config = SearchConfig {
            min_threshold: 2,
            max_threshold: 6,
            step: 2,
            trials: 1,
        };
        let x = Matrix::identity(8);
        ThresholdSearch::new(config)
            .with_progress(Box::new(move |p: SearchProgress| sink.lock().unwrap().push(p)))
            .run(&x, &x)
            .unwrap();
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[2],
            SearchProgress {
                threshold: 6,
                current: 3,
                total: 3
            }
        );
    }

    #[test]
    fn rejects_mismatched_inputs() {
        let x = Matrix::identity(4);
        let y = Matrix::identity(5);
        assert!(matches!(
            ThresholdSearch::new(SearchConfig::default()).run(&x, &y),
            Err(MatrixError::DimensionMismatch { left: 4, right: 5 })
        ));
    }
}
