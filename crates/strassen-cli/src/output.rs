//! CLI output formatting.

use std::fmt::Write as _;
use std::time::Duration;

use strassen_calibration::ThresholdTiming;
use strassen_core::Matrix;

/// Diagonal entries of a product, one per line.
#[must_use]
pub fn format_diagonal(product: &Matrix) -> String {
    let mut out = String::new();
    for value in product.diagonal() {
        let _ = writeln!(out, "{value}");
    }
    out
}

/// One threshold-search line: `"<mean seconds>, <threshold>"`.
#[must_use]
pub fn format_search_line(timing: &ThresholdTiming) -> String {
    format!("{:.6}, {}", timing.mean_secs, timing.threshold)
}

/// Mean triangle count with two decimals.
#[must_use]
pub fn format_triangle_mean(mean: f64) -> String {
    format!("{mean:.2}")
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a count with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
