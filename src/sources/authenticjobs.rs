use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::{
    util,
    schema::{JobRecord, NOT_AVAILABLE},
};

use super::adapter::SourceAdapter;

static CARD: Lazy<Selector> = Lazy::new(|| Selector::parse(".job-listing").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h4").unwrap());
static COMPANY: Lazy<Selector> = Lazy::new(|| Selector::parse("h5").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

const BASE: &str = "https://authenticjobs.com";

/// Authentic Jobs adapter
///
/// https://authenticjobs.com/
///
/// Layout:
/// - `.job-listing` per card; `h4` title, `h5` company (optional),
///   first href-bearing anchor is the detail link.
pub struct AuthenticJobsAdapter;

impl SourceAdapter for AuthenticJobsAdapter {

    fn name(&self) -> &'static str {
        "authenticjobs"
    }

    fn url(&self) -> &'static str {
        "https://authenticjobs.com/"
    }

    fn extract(&self, body: &str) -> Vec<JobRecord> {
        let doc = Html::parse_document(body);

        doc.select(&CARD)
            .filter_map(|card| {
                let title = card.select(&TITLE).next()?;
                let a = card.select(&ANCHOR).next()?;
                let href = a.value().attr("href")?;

                let company = card
                    .select(&COMPANY)
                    .next()
                    .map(|el| util::element_text(&el))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string());

                Some(JobRecord {
                    source: self.name().to_string(),
                    title: util::element_text(&title),
                    company,
                    link: util::join_url(BASE, href),
                })
            })
            .collect()
    }
}
