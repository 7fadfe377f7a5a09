use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::{
    util,
    schema::{JobRecord, NOT_AVAILABLE},
};

use super::adapter::SourceAdapter;

static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr.athing").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

const BASE: &str = "https://news.ycombinator.com/";

/// Hacker News jobs adapter
///
/// https://news.ycombinator.com/jobs
///
/// Layout:
/// - One `tr.athing` per listing
/// - The first anchor inside the row carries the title; its href is
///   a page-relative `item?id=...`
///
/// No company field on this board, so the company column gets the
/// sentinel.
pub struct HackerNewsAdapter;

impl SourceAdapter for HackerNewsAdapter {

    fn name(&self) -> &'static str {
        "hackernews"
    }

    fn url(&self) -> &'static str {
        "https://news.ycombinator.com/jobs"
    }

    fn extract(&self, body: &str) -> Vec<JobRecord> {
        let doc = Html::parse_document(body);

        doc.select(&ROW)
            .filter_map(|row| {
                let a = row.select(&ANCHOR).next()?;
                let href = a.value().attr("href")?;

                // Rows without an item link are page furniture
                if !href.contains("item?id=") {
                    return None;
                }

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

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <html><body><table>
        <tr class="athing" id="1">
          <td class="title"><span class="titleline">
            <a href="item?id=101">Acme (YC W24) Is Hiring Engineers</a>
          </span></td>
        </tr>
        <tr class="spacer"></tr>
        <tr class="athing" id="2">
          <td class="title"><span class="titleline">
            <a href="item?id=102">Beta Corp Is Hiring a Designer</a>
          </span></td>
        </tr>
        <tr class="athing" id="3">
          <td class="title"><span class="titleline">
            <a href="from?site=example.com">external link, no item id</a>
          </span></td>
        </tr>
        </table></body></html>"#;

    #[test]
    fn extracts_item_rows_in_page_order() {
        let records = HackerNewsAdapter.extract(FIXTURE);
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            JobRecord {
                source: "hackernews".into(),
                title: "Acme (YC W24) Is Hiring Engineers".into(),
                company: NOT_AVAILABLE.into(),
                link: "https://news.ycombinator.com/item?id=101".into(),
            }
        );
        assert_eq!(records[1].title, "Beta Corp Is Hiring a Designer");
        assert_eq!(records[1].link, "https://news.ycombinator.com/item?id=102");
    }

    #[test]
    fn page_without_listings_yields_empty() {
        let records = HackerNewsAdapter.extract("<html><body><p>maintenance</p></body></html>");
        assert!(records.is_empty());
    }
}
