// ------------------------------------------------------------
// Renderer entry point
// ------------------------------------------------------------
//
// Second batch stage: read the CSV table produced by `collect`
// and regenerate the static HTML page from it. Runs after the
// collector, independently; the file is the only coupling.
//
// A missing input table is fatal: it is logged as its own
// condition and the process exits without writing any output.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use jobboard::{config::Config, render};

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let config = match Config::load(&config_path()) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // All failure paths are logged inside the stage itself; the
    // binary only maps the outcome to an exit status.
    let csv_path = Path::new(&config.output.csv_path);
    let html_path = Path::new(&config.output.html_path);
    match render::render_to_file(csv_path, html_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// Configuration file path: first CLI argument, or `config.json`.
fn config_path() -> PathBuf {
    env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new("config.json").to_path_buf())
}
