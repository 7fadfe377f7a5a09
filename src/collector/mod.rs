/// Collector module
///
/// This module groups all logic responsible for:
/// - Fetching each configured source once per run
/// - Containing per-source failures
/// - Aggregating every source's records into one ordered batch
///
/// The collector layer acts as the orchestration layer between:
/// - Source adapters (Hacker News, Python.org, Remotive, …)
/// - The CSV store (output layer)
///
/// Design notes:
/// - Site-specific logic MUST NOT live here
/// - This module should remain thin and orchestration-focused
/// - All extraction logic belongs to the adapters
pub mod runner;
