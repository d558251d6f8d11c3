//! CLI result presenter.
//!
//! Results go to stdout in the plain line formats of [`crate::output`];
//! everything else (timings, details) goes to stderr through
//! [`crate::ui`] and is suppressed in quiet mode.

use std::time::Duration;

use serde::Serialize;

use strassen_calibration::{SearchProgress, SearchReport};
use strassen_core::Matrix;
use strassen_graph::TriangleEstimate;

use crate::output::{
    format_diagonal, format_duration, format_number, format_search_line, format_triangle_mean,
};
use crate::ui;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print the diagonal of a product.
    pub fn present_product(&self, product: &Matrix, algorithm: &str, duration: Duration) {
        print!("{}", format_diagonal(product));
        if self.quiet {
            return;
        }
        ui::print_success(&format!(
            "{algorithm} product of dimension {} in {}",
            product.dim(),
            format_duration(duration)
        ));
        if self.verbose {
            eprintln!("Trace: {}", product.trace());
        }
    }

    /// Print the mean triangle count.
    pub fn present_triangles(&self, estimate: &TriangleEstimate, duration: Duration) {
        println!("{}", format_triangle_mean(estimate.mean));
        if self.quiet {
            return;
        }
        ui::print_success(&format!(
            "{} trials on {} vertices (p = {}) in {}",
            estimate.counts.len(),
            format_number(estimate.vertices as u64),
            estimate.probability,
            format_duration(duration)
        ));
        if self.verbose {
            eprintln!("Seed: {}", estimate.seed);
            eprintln!("Expected: {:.2}", estimate.expected);
            for (trial, count) in estimate.counts.iter().enumerate() {
                eprintln!("  trial {trial:>3}: {}", format_number(*count));
            }
        }
    }

    /// Print one line per threshold, then the best threshold.
    pub fn present_search(&self, report: &SearchReport) {
        for timing in &report.timings {
            println!("{}", format_search_line(timing));
        }
        println!("{}", report.best_threshold);
        if self.quiet {
            return;
        }
        ui::print_success(&format!(
            "best threshold {} ({} mean over {} trials)",
            report.best_threshold,
            format_duration(Duration::from_secs_f64(report.best_mean_secs)),
            report.trials
        ));
        if self.verbose {
            eprintln!("CPU: {} ({} cores)", report.cpu_model, report.num_cores);
            eprintln!("{:-<60}", "");
            for t in &report.timings {
                eprintln!(
                    "  {:>5} {:>12} {:>12} {:>12}",
                    t.threshold,
                    format_duration(Duration::from_secs_f64(t.min_secs)),
                    format_duration(Duration::from_secs_f64(t.median_secs)),
                    format_duration(Duration::from_secs_f64(t.max_secs)),
                );
            }
        }
    }

    /// Print any serializable report as pretty JSON on stdout.
    pub fn present_json<T: Serialize>(&self, value: &T) -> serde_json::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print an error line to stderr, even in quiet mode.
    pub fn present_error(&self, error: &str) {
        ui::print_error(error);
    }

    /// Callback printing search progress to stderr, or `None` when quiet.
    #[must_use]
    pub fn search_progress(&self) -> Option<Box<dyn Fn(SearchProgress) + Send>> {
        if self.quiet {
            return None;
        }
        Some(Box::new(|p: SearchProgress| {
            ui::print_info(&format!(
                "[{}/{}] threshold {} timed",
                p.current, p.total, p.threshold
            ));
        }))
    }
}
