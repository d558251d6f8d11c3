//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use strassen_calibration::SearchConfig;
use strassen_core::{MatrixError, DEFAULT_STRASSEN_THRESHOLD};
use strassen_graph::TriangleConfig;

/// Strassen-rs: Strassen matrix multiplication, random-graph triangle
/// counting and base-case threshold search.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Mode flag: 0 < FLAG < 1 counts triangles with edge probability FLAG,
    /// FLAG = 1 searches thresholds, anything else multiplies.
    #[arg(required_unless_present = "completion", allow_negative_numbers = true)]
    pub flag: Option<f64>,

    /// Matrix dimension.
    #[arg(required_unless_present = "completion")]
    pub dimension: Option<usize>,

    /// File with the two input matrices, whitespace-separated, row-major.
    pub input: Option<PathBuf>,

    /// Strassen base-case threshold (0 = default).
    #[arg(long, default_value = "0", env = "STRASSEN_THRESHOLD")]
    pub threshold: usize,

    /// Trials per triangle estimate or per searched threshold (0 = default).
    #[arg(long, default_value = "0")]
    pub trials: usize,

    /// Vertices per random graph in triangle mode (0 = default).
    #[arg(long, default_value = "0")]
    pub vertices: usize,

    /// Seed for the random graphs.
    #[arg(long, env = "STRASSEN_SEED")]
    pub seed: Option<u64>,

    /// Smallest threshold tried by the search (0 = default).
    #[arg(long, default_value = "0")]
    pub min_threshold: usize,

    /// Largest threshold tried by the search (0 = default).
    #[arg(long, default_value = "0")]
    pub max_threshold: usize,

    /// Increment between searched thresholds (0 = default).
    #[arg(long, default_value = "0")]
    pub step: usize,

    /// Cross-check the Strassen product against the triple loop.
    #[arg(long)]
    pub verify: bool,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (results only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// What the program does, chosen by the numeric flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Estimate triangles in random graphs with this edge probability.
    Triangles { probability: f64 },
    /// Time the multiplier over a range of thresholds.
    Search,
    /// Multiply the two input matrices and print the diagonal.
    Multiply,
}

impl Mode {
    /// `0 < flag < 1` counts triangles, `flag == 1` searches, anything else
    /// (including NaN) multiplies.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_flag(flag: f64) -> Self {
        if flag > 0.0 && flag < 1.0 {
            Mode::Triangles { probability: flag }
        } else if flag == 1.0 {
            Mode::Search
        } else {
            Mode::Multiply
        }
    }
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Mode selected by the flag.
    pub fn mode(&self) -> Result<Mode, MatrixError> {
        self.flag
            .map(Mode::from_flag)
            .ok_or_else(|| MatrixError::Config("missing FLAG argument".into()))
    }

    /// Matrix dimension argument.
    pub fn dimension(&self) -> Result<usize, MatrixError> {
        self.dimension
            .ok_or_else(|| MatrixError::Config("missing DIMENSION argument".into()))
    }

    /// Input path, required by the modes that read matrices.
    pub fn input_path(&self) -> Result<&PathBuf, MatrixError> {
        self.input
            .as_ref()
            .ok_or_else(|| MatrixError::Config("this mode needs an INPUT file".into()))
    }

    /// Strassen threshold with 0 mapped to the default.
    #[must_use]
    pub fn threshold(&self) -> usize {
        if self.threshold == 0 {
            DEFAULT_STRASSEN_THRESHOLD
        } else {
            self.threshold
        }
    }

    /// Search range with zero-valued options mapped to their defaults.
    #[must_use]
    pub fn search_config(&self) -> SearchConfig {
        let defaults = SearchConfig::default();
        let or_default = |value: usize, default: usize| if value == 0 { default } else { value };
        SearchConfig {
            min_threshold: or_default(self.min_threshold, defaults.min_threshold),
            max_threshold: or_default(self.max_threshold, defaults.max_threshold),
            step: or_default(self.step, defaults.step),
            trials: or_default(self.trials, defaults.trials),
        }
    }

    /// Triangle estimate parameters for `probability`.
    #[must_use]
    pub fn triangle_config(&self, probability: f64) -> TriangleConfig {
        TriangleConfig {
            vertices: self.vertices,
            probability,
            trials: self.trials,
            threshold: self.threshold,
            seed: self.seed,
        }
        .normalize()
    }
}
