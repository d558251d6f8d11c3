//! # strassen-calibration
//!
//! Empirical threshold search for Strassen-rs: times the recursive multiplier
//! over a range of base-case thresholds and reports the fastest one together
//! with the machine it was measured on.

pub mod profile;
pub mod runner;
pub mod search;

pub use profile::{SearchReport, ThresholdTiming};
pub use search::{SearchConfig, SearchProgress, ThresholdSearch};
