use serde::Deserialize;

use crate::schema::JobRecord;

use super::adapter::SourceAdapter;

/// Remotive API adapter
///
/// https://remotive.io/api/remote-jobs?category=software-dev
///
/// The only JSON source: the API returns `{ "jobs": [...] }` with
/// fully-qualified listing URLs, so no base-prefixing is needed here.
///
/// Decode failures (malformed JSON, shape drift) are logged together
/// with the raw payload so shape changes can be diagnosed from the
/// log alone, and yield an empty batch.
pub struct RemotiveAdapter;

#[derive(Deserialize)]
struct RemotivePayload {
    jobs: Vec<RemotiveJob>,
}

#[derive(Deserialize)]
struct RemotiveJob {
    title: String,
    company_name: String,
    url: String,
}

impl SourceAdapter for RemotiveAdapter {

    fn name(&self) -> &'static str {
        "remotive"
    }

    fn url(&self) -> &'static str {
        "https://remotive.io/api/remote-jobs?category=software-dev"
    }

    fn extract(&self, body: &str) -> Vec<JobRecord> {
        let payload: RemotivePayload = match serde_json::from_str(body) {
            Ok(p) => p,
            Err(e) => {
                log::error!("[{}] payload decode failed: {e}; raw payload: {body}", self.name());
                return Vec::new();
            }
        };

        payload
            .jobs
            .into_iter()
            .map(|job| JobRecord {
                source: self.name().to_string(),
                title: job.title,
                company: job.company_name,
                link: job.url,
            })
            .collect()
    }
}
