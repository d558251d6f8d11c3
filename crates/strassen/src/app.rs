//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;

use strassen_calibration::ThresholdSearch;
use strassen_cli::input::read_matrices;
use strassen_cli::presenter::CLIResultPresenter;
use strassen_core::{cross_validate, Element, Matrix, Multiplier, StrassenMultiplier};
use strassen_graph::estimate_triangles;

use crate::config::{AppConfig, Mode};

/// JSON shape of a multiply-mode result.
#[derive(Debug, Serialize)]
struct ProductReport {
    dimension: usize,
    threshold: usize,
    verified: bool,
    diagonal: Vec<Element>,
    trace: Element,
    duration_secs: f64,
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        strassen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter = CLIResultPresenter::new(config.details, config.quiet);
    match config.mode()? {
        Mode::Multiply => run_multiply(config, &presenter),
        Mode::Search => run_search(config, &presenter),
        Mode::Triangles { probability } => run_triangles(config, &presenter, probability),
    }
}

fn load_inputs(config: &AppConfig) -> Result<(Matrix, Matrix)> {
    let dim = config.dimension()?;
    let path = config.input_path()?;
    let matrices = read_matrices(path, dim)?;
    tracing::debug!(dim, path = %path.display(), "loaded input matrices");
    Ok(matrices)
}

fn run_multiply(config: &AppConfig, presenter: &CLIResultPresenter) -> Result<()> {
    let (x, y) = load_inputs(config)?;
    let threshold = config.threshold();
    let multiplier = StrassenMultiplier::new(threshold);

    let start = Instant::now();
    let product = if config.verify {
        cross_validate(&x.view(), &y.view(), threshold)
            .context("strassen product failed verification")?
    } else {
        multiplier.multiply(&x.view(), &y.view())?
    };
    let duration = start.elapsed();

    if config.json {
        presenter.present_json(&ProductReport {
            dimension: product.dim(),
            threshold,
            verified: config.verify,
            diagonal: product.diagonal(),
            trace: product.trace(),
            duration_secs: duration.as_secs_f64(),
        })?;
    } else {
        presenter.present_product(&product, multiplier.name(), duration);
    }
    Ok(())
}

fn run_search(config: &AppConfig, presenter: &CLIResultPresenter) -> Result<()> {
    let (x, y) = load_inputs(config)?;
    let mut search = ThresholdSearch::new(config.search_config());
    if !config.json {
        if let Some(cb) = presenter.search_progress() {
            search = search.with_progress(cb);
        }
    }

    let report = search.run(&x, &y)?;
    if config.verify {
        cross_validate(&x.view(), &y.view(), report.best_threshold)
            .context("strassen product failed verification at the best threshold")?;
    }

    if config.json {
        presenter.present_json(&report)?;
    } else {
        presenter.present_search(&report);
    }
    Ok(())
}

fn run_triangles(
    config: &AppConfig,
    presenter: &CLIResultPresenter,
    probability: f64,
) -> Result<()> {
    if let Some(dim) = config.dimension {
        tracing::debug!(dim, "dimension argument is not used in triangle mode");
    }
    let triangle_config = config.triangle_config(probability);

    let start = Instant::now();
    let estimate = estimate_triangles(&triangle_config)?;
    let duration = start.elapsed();

    if config.json {
        presenter.present_json(&estimate)?;
    } else {
        presenter.present_triangles(&estimate, duration);
    }
    Ok(())
}
