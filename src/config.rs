use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

// ------------------------------------------------------------
// Root configuration
// ------------------------------------------------------------
//
// This is the top-level configuration structure loaded from
// `config.json`.
//
// It defines:
// - HTTP client settings shared by all fetches
// - The source list, in aggregation order, with per-source
//   enable flags
// - Output file locations
//
// Every field has a default so the collector and renderer can run
// without a config file at all.
//
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Shared HTTP settings
    pub http: HttpConfig,

    /// Sources in aggregation order
    pub sources: Vec<SourceConfig>,

    /// Output file locations
    pub output: OutputConfig,

    /// Number of records echoed to the log after a collect run
    pub preview: usize,
}

// ------------------------------------------------------------
// HTTP configuration
// ------------------------------------------------------------
//
// One client is built per collect run and reused across sources.
//
// NOTES:
// - The user agent is a realistic browser string; several of the
//   job boards answer 403 to the default library agent.
// - The timeout applies per request. One attempt per source per
//   run, no retry, no backoff.
//
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Outbound User-Agent header
    pub user_agent: String,
}

// ------------------------------------------------------------
// Source configuration
// ------------------------------------------------------------
//
// One entry per source. Order matters: the aggregator visits the
// list top to bottom, and the output table keeps that order.
//
// `enabled` is an explicit flag rather than list membership so a
// flaky source can be switched off without losing its place.
//
#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    /// Source identifier (e.g. "hackernews", "python_org")
    pub name: String,

    /// Enables or disables this source at runtime. Listing a source
    /// without the flag means it runs.
    #[serde(default = "enabled_default")]
    pub enabled: bool,
}

fn enabled_default() -> bool {
    true
}

// ------------------------------------------------------------
// Output configuration
// ------------------------------------------------------------
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    /// CSV table written by the collector, read by the renderer
    pub csv_path: String,

    /// Static page written by the renderer
    pub html_path: String,
}

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/114.0.0.0 Safari/537.36";

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "data/jobs.csv".to_string(),
            html_path: "public/index.html".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            sources: default_sources(),
            output: OutputConfig::default(),
            preview: 10,
        }
    }
}

/// Built-in source list.
///
/// Remotive starts disabled (the API has been unreliable); flip the
/// flag in `config.json` to include it in a run.
fn default_sources() -> Vec<SourceConfig> {
    let enabled = [
        ("hackernews", true),
        ("python_org", true),
        ("jsremotely", true),
        ("remotive", false),
        ("workingnomads", true),
        ("authenticjobs", true),
    ];
    enabled
        .into_iter()
        .map(|(name, enabled)| SourceConfig { name: name.to_string(), enabled })
        .collect()
}

impl Config {
    /// Reads a JSON configuration file from disk.
    ///
    /// A missing file is not an error: the built-in defaults are
    /// used instead (and logged). Any other I/O or parse failure
    /// propagates.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        match fs::read_to_string(path) {
            Ok(data) => {
                let cfg = serde_json::from_str(&data)?;
                Ok(cfg)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "no config file at {}, using built-in defaults",
                    path.display()
                );
                Ok(Config::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_all_known_sources() {
        let cfg = Config::default();
        let names: Vec<&str> = cfg.sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["hackernews", "python_org", "jsremotely", "remotive", "workingnomads", "authenticjobs"]
        );
        // remotive ships disabled, everything else enabled
        for s in &cfg.sources {
            assert_eq!(s.enabled, s.name != "remotive");
        }
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: Config = serde_json::from_str(
            r#"{ "sources": [ { "name": "hackernews", "enabled": true } ] }"#,
        )
        .unwrap();
        assert_eq!(cfg.sources.len(), 1);
        assert_eq!(cfg.http.timeout_secs, 10);
        assert_eq!(cfg.output.csv_path, "data/jobs.csv");
        assert_eq!(cfg.preview, 10);
    }

    #[test]
    fn source_entry_without_flag_is_enabled() {
        let cfg: Config = serde_json::from_str(
            r#"{ "sources": [
                { "name": "hackernews" },
                { "name": "remotive", "enabled": false }
            ] }"#,
        )
        .unwrap();
        assert!(cfg.sources[0].enabled);
        assert!(!cfg.sources[1].enabled);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = Config::load(Path::new("does/not/exist/config.json")).unwrap();
        assert_eq!(cfg.sources.len(), 6);
    }
}
