use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::{util, schema::JobRecord};

use super::adapter::SourceAdapter;

static CARD: Lazy<Selector> = Lazy::new(|| Selector::parse("div#jobsboard > a").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").unwrap());
static COMPANY: Lazy<Selector> = Lazy::new(|| Selector::parse("h4").unwrap());

const BASE: &str = "https://www.workingnomads.com";

/// Working Nomads adapter
///
/// https://www.workingnomads.com/jobs
///
/// Layout:
/// - The board is a list of anchors directly under `div#jobsboard`;
///   each anchor wraps an `h3` (title) and `h4` (company).
/// - Both headings are required; anchors missing either are
///   navigation chrome and are skipped.
pub struct WorkingNomadsAdapter;

impl SourceAdapter for WorkingNomadsAdapter {

    fn name(&self) -> &'static str {
        "workingnomads"
    }

    fn url(&self) -> &'static str {
        "https://www.workingnomads.com/jobs"
    }

    fn extract(&self, body: &str) -> Vec<JobRecord> {
        let doc = Html::parse_document(body);

        doc.select(&CARD)
            .filter_map(|a| {
                let title = a.select(&TITLE).next()?;
                let company = a.select(&COMPANY).next()?;
                let href = a.value().attr("href")?;

                Some(JobRecord {
                    source: self.name().to_string(),
                    title: util::element_text(&title),
                    company: util::element_text(&company),
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
        <div id="jobsboard">
          <a href="/jobs/senior-rust-developer">
            <h3>Senior Rust Developer</h3>
            <h4>Nomad Systems</h4>
          </a>
          <a href="/jobs/all"><h3>Browse all jobs</h3></a>
          <a href="/jobs/platform-engineer">
            <h3>Platform Engineer</h3>
            <h4>Cloudline</h4>
          </a>
        </div>"#;

    #[test]
    fn requires_title_and_company_headings() {
        let records = WorkingNomadsAdapter.extract(FIXTURE);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Senior Rust Developer");
        assert_eq!(records[0].company, "Nomad Systems");
        assert_eq!(
            records[0].link,
            "https://www.workingnomads.com/jobs/senior-rust-developer"
        );
        assert_eq!(records[1].company, "Cloudline");
    }

    #[test]
    fn empty_board_yields_empty() {
        assert!(WorkingNomadsAdapter.extract("<div id=\"jobsboard\"></div>").is_empty());
    }
}
