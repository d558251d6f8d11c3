//! Threshold search report (serializable) and machine metadata.

use serde::{Deserialize, Serialize};

use crate::runner::TimingSummary;

/// Timings recorded for one candidate threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTiming {
    /// Strassen base-case dimension that was timed.
    pub threshold: usize,
    /// Mean wall-clock seconds per multiplication.
    pub mean_secs: f64,
    /// Median wall-clock seconds.
    pub median_secs: f64,
    /// Fastest trial in seconds.
    pub min_secs: f64,
    /// Slowest trial in seconds.
    pub max_secs: f64,
}

impl ThresholdTiming {
    /// Build from a timing summary.
    #[must_use]
    pub fn from_summary(threshold: usize, summary: &TimingSummary) -> Self {
        Self {
            threshold,
            mean_secs: summary.mean.as_secs_f64(),
            median_secs: summary.median.as_secs_f64(),
            min_secs: summary.min.as_secs_f64(),
            max_secs: summary.max.as_secs_f64(),
        }
    }
}

/// Outcome of a full threshold search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Dimension of the multiplied matrices.
    pub dimension: usize,
    /// Timed multiplications per threshold.
    pub trials: usize,
    /// One entry per threshold, ascending.
    pub timings: Vec<ThresholdTiming>,
    /// Threshold with the smallest mean.
    pub best_threshold: usize,
    /// Mean runtime of `best_threshold` in seconds.
    pub best_mean_secs: f64,
    /// CPU model the search ran on.
    pub cpu_model: String,
    /// Number of CPU cores.
    pub num_cores: usize,
    /// Search timestamp.
    pub timestamp: String,
}

impl SearchReport {
    /// Timing entry for `threshold`, if it was part of the search.
    #[must_use]
    pub fn timing_for(&self, threshold: usize) -> Option<&ThresholdTiming> {
        self.timings.iter().find(|t| t.threshold == threshold)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Number of logical cores available to this process.
#[must_use]
pub fn num_cores() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(1)
}

/// Get the current CPU model string.
#[must_use]
pub fn cpu_model() -> String {
    use sysinfo::System;
    let sys = System::new_all();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .unwrap_or_default()
}

/// Seconds since the Unix epoch, as `unix:<secs>`.
#[must_use]
pub fn current_timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("unix:{}", dur.as_secs())
}
