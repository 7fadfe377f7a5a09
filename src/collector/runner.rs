use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use reqwest::Client;

use crate::{
    config::Config,
    schema::JobRecord,
    sources::{self, adapter::SourceAdapter},
};

/// Resolves the enabled members of the configured source list to
/// adapter instances, preserving configuration order.
///
/// Disabled entries are skipped with an info log; unknown names are
/// warned about and skipped. Either way the rest of the list is
/// unaffected.
pub fn enabled_adapters(config: &Config) -> Vec<Arc<dyn SourceAdapter>> {
    let mut adapters = Vec::new();

    for source_cfg in &config.sources {
        if !source_cfg.enabled {
            log::info!("[{}] disabled by configuration, skipping", source_cfg.name);
            continue;
        }
        match sources::get_adapter(&source_cfg.name) {
            Some(adapter) => adapters.push(adapter),
            None => log::warn!("source '{}' is not supported", source_cfg.name),
        }
    }

    adapters
}

/// Fetches one source and extracts its records.
///
/// GUARANTEES:
/// - Never propagates an error: transport failures (timeout,
///   refused connection, DNS, non-2xx status) are logged with the
///   source name and yield an empty batch
/// - One attempt per run, no retry, no backoff
///
/// NOT RESPONSIBLE FOR:
/// - Extraction (adapter responsibility)
/// - Persistence (store responsibility)
pub async fn fetch_source(client: &Client, adapter: &dyn SourceAdapter) -> Vec<JobRecord> {
    match fetch_body(client, adapter.url()).await {
        Ok(body) => {
            let records = adapter.extract(&body);
            log::info!("[{}] scraped successfully, {} offers", adapter.name(), records.len());
            records
        }
        Err(e) => {
            log::error!("[{}] fetch failed: {e:#}", adapter.name());
            Vec::new()
        }
    }
}

async fn fetch_body(client: &Client, url: &str) -> anyhow::Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {url}"))?
        .error_for_status()?;

    Ok(response.text().await?)
}

/// Concatenates per-source batches into one ordered sequence.
///
/// Batch order is source order; each batch's internal order is
/// preserved. The result length is the sum of the batch lengths,
/// empty batches contributing nothing.
pub fn aggregate<I>(batches: I) -> Vec<JobRecord>
where
    I: IntoIterator<Item = Vec<JobRecord>>,
{
    batches.into_iter().flatten().collect()
}

/// Runs one full collect pass: every enabled source, in
/// configuration order, one at a time.
///
/// Each fetch runs to completion (success or contained failure)
/// before the next begins; per-source order is preserved inside the
/// concatenated batch.
///
/// Only HTTP client construction can fail here. A source that
/// produces nothing never aborts the run.
pub async fn run_collect(config: &Config) -> anyhow::Result<Vec<JobRecord>> {
    let client = Client::builder()
        .user_agent(config.http.user_agent.as_str())
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .build()
        .context("building HTTP client")?;

    let mut batches = Vec::new();
    for adapter in enabled_adapters(config) {
        batches.push(fetch_source(&client, adapter.as_ref()).await);
    }

    let all = aggregate(batches);
    report(&all, config.preview);
    Ok(all)
}

/// Post-run observability: total count, preview of the first N
/// records, and a distinguishable warning on an empty result (an
/// empty run almost always means breakage, not an empty market).
fn report(records: &[JobRecord], preview: usize) {
    log::info!("collected {} job offers", records.len());

    if records.is_empty() {
        log::warn!("no job offers found across any source");
        return;
    }

    for rec in records.iter().take(preview) {
        log::info!("  {} | {} | {} | {}", rec.source, rec.title, rec.company, rec.link);
    }
}
