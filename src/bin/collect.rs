// ------------------------------------------------------------
// Collector entry point
// ------------------------------------------------------------
//
// First batch stage: fetch every enabled source once, aggregate
// the extracted records in configuration order and rebuild the
// CSV table. The renderer (`render`) runs afterwards as a
// separate invocation, coupled only through that file.
//
// Execution is strictly sequential: a single-threaded runtime,
// one source awaited to completion before the next begins.

use std::env;
use std::path::{Path, PathBuf};

use jobboard::{collector::runner::run_collect, config::Config, store};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let config = Config::load(&config_path())?;

    log::info!("scraping started");

    // Per-source failures are contained inside the run; only
    // client construction can surface here.
    let records = run_collect(&config).await?;

    let csv_path = PathBuf::from(&config.output.csv_path);
    store::write_table(&csv_path, &records)?;
    log::info!(
        "generated {} with {} job offers",
        csv_path.display(),
        records.len()
    );

    log::info!("scraping completed");
    Ok(())
}

/// Configuration file path: first CLI argument, or `config.json`.
fn config_path() -> PathBuf {
    env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new("config.json").to_path_buf())
}
