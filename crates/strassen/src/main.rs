//! Strassen-rs: Strassen matrix multiplication from the command line.

use std::process::ExitCode;

use strassen_app::{app, config, errors};
use strassen_cli::CLIResultPresenter;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries results only.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let presenter = CLIResultPresenter::new(config.details, config.quiet);
            presenter.present_error(&format!("{err:#}"));
            ExitCode::from(u8::try_from(errors::exit_code(&err)).unwrap_or(1))
        }
    }
}
