use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::{
    util,
    schema::{JobRecord, NOT_AVAILABLE},
};

use super::adapter::SourceAdapter;

static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse(".list-recent-jobs li").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").unwrap());
static TITLE_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("h2 a").unwrap());
static COMPANY: Lazy<Selector> = Lazy::new(|| Selector::parse("span.listing-company-name").unwrap());

const BASE: &str = "https://www.python.org";

/// Python.org job board adapter
///
/// https://www.python.org/jobs/
///
/// Layout:
/// - `.list-recent-jobs li` per listing
/// - `h2` holds the title, with the detail link on its anchor
///   (page-relative `/jobs/<id>/`)
/// - `span.listing-company-name` holds the company; records without
///   one still go out with the sentinel
pub struct PythonOrgAdapter;

impl SourceAdapter for PythonOrgAdapter {

    fn name(&self) -> &'static str {
        "python_org"
    }

    fn url(&self) -> &'static str {
        "https://www.python.org/jobs/"
    }

    fn extract(&self, body: &str) -> Vec<JobRecord> {
        let doc = Html::parse_document(body);

        doc.select(&ITEM)
            .filter_map(|item| {
                let h2 = item.select(&TITLE).next()?;
                let a = item.select(&TITLE_LINK).next()?;
                let href = a.value().attr("href")?;

                let company = item
                    .select(&COMPANY)
                    .next()
                    .map(|el| util::element_text(&el))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string());

                Some(JobRecord {
                    source: self.name().to_string(),
                    title: util::element_text(&h2),
                    company,
                    link: util::join_url(BASE, href),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <ol class="list-recent-jobs">
          <li>
            <h2 class="listing-company"><a href="/jobs/7701/">Backend Developer</a></h2>
            <span class="listing-company-name">PyWorks GmbH</span>
          </li>
          <li>
            <h2 class="listing-company"><a href="/jobs/7702/">Data Engineer</a></h2>
          </li>
          <li>
            <p>listing withdrawn</p>
          </li>
        </ol>"#;

    #[test]
    fn extracts_title_company_and_link() {
        let records = PythonOrgAdapter.extract(FIXTURE);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].source, "python_org");
        assert_eq!(records[0].title, "Backend Developer");
        assert_eq!(records[0].company, "PyWorks GmbH");
        assert_eq!(records[0].link, "https://www.python.org/jobs/7701/");

        // missing company span falls back to the sentinel
        assert_eq!(records[1].title, "Data Engineer");
        assert_eq!(records[1].company, NOT_AVAILABLE);
        assert_eq!(records[1].link, "https://www.python.org/jobs/7702/");
    }

    #[test]
    fn item_without_heading_is_skipped() {
        let records = PythonOrgAdapter.extract(
            r#"<ul class="list-recent-jobs"><li><span>no heading here</span></li></ul>"#,
        );
        assert!(records.is_empty());
    }
}
