//! Timing runner for threshold calibration.

use std::time::{Duration, Instant};

use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Time `trials` independent invocations of `f` on the rayon pool.
///
/// Each trial measures its own wall-clock duration; durations come back by
/// value and are summarised after every trial has joined. The first error
/// aborts the run.
pub fn time_parallel<F, T, E>(trials: usize, f: F) -> Result<TimingSummary, E>
where
    F: Fn() -> Result<T, E> + Sync,
    E: Send,
{
    let durations = (0..trials)
        .into_par_iter()
        .map(|_| -> Result<Duration, E> {
            let start = Instant::now();
            f()?;
            Ok(start.elapsed())
        })
        .collect::<Result<Vec<Duration>, E>>()?;
    Ok(summarize(durations))
}

/// Reduce raw durations to mean, median, min and max.
#[must_use]
pub fn summarize(mut durations: Vec<Duration>) -> TimingSummary {
    durations.sort();
    let samples = durations.len();
    let min = durations.first().copied().unwrap_or_default();
    let max = durations.last().copied().unwrap_or_default();
    let median = match samples {
        0 => Duration::ZERO,
        n if n % 2 == 1 => durations[n / 2],
        n => (durations[n / 2 - 1] + durations[n / 2]) / 2,
    };
    let total: Duration = durations.iter().sum();
    let mean = u32::try_from(samples)
        .ok()
        .filter(|&n| n > 0)
        .map_or(Duration::ZERO, |n| total / n);

    TimingSummary {
        mean,
        median,
        min,
        max,
        samples,
    }
}

/// Summary statistics of one batch of timed trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSummary {
    pub mean: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub samples: usize,
}
