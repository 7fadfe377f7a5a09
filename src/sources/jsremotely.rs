use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::{
    util,
    schema::{JobRecord, NOT_AVAILABLE},
};

use super::adapter::SourceAdapter;

static CARD: Lazy<Selector> = Lazy::new(|| Selector::parse("div.job").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

const BASE: &str = "https://jsremotely.com";

/// JSRemotely adapter
///
/// https://jsremotely.com/
///
/// Layout:
/// - One `div.job` card per listing, first anchor carries title and
///   page-relative href. No company field.
pub struct JsRemotelyAdapter;

impl SourceAdapter for JsRemotelyAdapter {

    fn name(&self) -> &'static str {
        "jsremotely"
    }

    fn url(&self) -> &'static str {
        "https://jsremotely.com/"
    }

    fn extract(&self, body: &str) -> Vec<JobRecord> {
        let doc = Html::parse_document(body);

        doc.select(&CARD)
            .filter_map(|card| {
                let a = card.select(&ANCHOR).next()?;
                let href = a.value().attr("href")?;

                Some(JobRecord {
                    source: self.name().to_string(),
                    title: util::element_text(&a),
                    company: NOT_AVAILABLE.to_string(),
                    link: util::join_url(BASE, href),
                })
            })
            .collect()
    }
}
