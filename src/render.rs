//! Static HTML page generation.
//!
//! The rendered page is a pure function of the table contents and a
//! fixed embedded template: no JavaScript, no external assets, fit
//! for any static file host. It is fully regenerated on every run,
//! never patched in place.
//!
//! All interpolated text is HTML-escaped. The one deliberate piece
//! of markup per row is the link column, rendered as an anchor whose
//! href and visible text both equal the cell value; a link cell that
//! is not plain http(s) falls back to an escaped text cell instead
//! of becoming an anchor.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::schema::LINK_COLUMN;
use crate::store::{self, Table};

/// Fixed stylesheet: bordered table, and a narrow-viewport fallback
/// that stacks cells vertically with their `data-label` annotations.
const STYLE: &str = r"        table {
            border-collapse: collapse;
            width: 100%;
        }
        th, td {
            border: 1px solid black;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #f2f2f2;
        }
        @media screen and (max-width: 600px) {
            table, thead, tbody, th, td, tr {
                display: block;
            }
            thead tr {
                position: absolute;
                top: -9999px;
                left: -9999px;
            }
            tr {
                border: 1px solid black;
            }
            td {
                border: none;
                border-bottom: 1px solid black;
                position: relative;
                padding-left: 50%;
            }
            td:before {
                position: absolute;
                top: 6px;
                left: 6px;
                width: 45%;
                padding-right: 10px;
                white-space: nowrap;
                content: attr(data-label);
                text-align: left;
                font-weight: bold;
            }
        }
";

/// Escape text for interpolation into element content or a
/// double-quoted attribute value.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Only plain web URLs become anchors. Anything else (relative
/// paths, `javascript:` and friends, garbage cells) renders as text.
/// Scheme matching ignores case, as URL schemes do.
fn is_linkable(url: &str) -> bool {
    has_scheme(url, "https://") || has_scheme(url, "http://")
}

fn has_scheme(url: &str, scheme: &str) -> bool {
    url.get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

/// Renders the full document: header row verbatim (escaped), one
/// body row per table row, column order preserved.
pub fn render_page(table: &Table) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("    <title>Job Listings</title>\n");
    html.push_str("    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n");
    html.push_str("    <h1>Job Listings</h1>\n");
    html.push_str("    <table>\n        <thead>\n            <tr>\n");

    for header in &table.headers {
        html.push_str(&format!("                <th>{}</th>\n", escape_html(header)));
    }

    html.push_str("            </tr>\n        </thead>\n        <tbody>\n");

    for row in &table.rows {
        html.push_str("            <tr>\n");
        for (header, cell) in table.headers.iter().zip(row) {
            let label = escape_html(header);
            let value = escape_html(cell);
            if header == LINK_COLUMN && is_linkable(cell) {
                html.push_str(&format!(
                    "                <td data-label=\"{label}\"><a href=\"{value}\">{value}</a></td>\n"
                ));
            } else {
                html.push_str(&format!(
                    "                <td data-label=\"{label}\">{value}</td>\n"
                ));
            }
        }
        html.push_str("            </tr>\n");
    }

    html.push_str("        </tbody>\n    </table>\n</body>\n</html>\n");
    html
}

/// Writes the page, creating the containing directory on demand and
/// overwriting any prior file.
pub fn write_page(path: &Path, html: &str) -> anyhow::Result<()> {
    store::ensure_parent_dir(path)?;
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))
}

/// Runs the whole render stage against the filesystem: read the
/// table, regenerate the page, write it out.
///
/// A missing input table aborts before any output is written and is
/// logged as its own condition; any other failure is logged too.
/// The error still propagates so callers can map it to an exit
/// status.
pub fn render_to_file(csv_path: &Path, html_path: &Path) -> anyhow::Result<()> {
    let table = store::read_table(csv_path).inspect_err(|e| {
        if store::is_not_found(e) {
            log::error!("source file not found: {}", csv_path.display());
        } else {
            log::error!("failed to read {}: {e:#}", csv_path.display());
        }
    })?;

    let html = render_page(&table);
    write_page(html_path, &html)
        .inspect_err(|e| log::error!("failed to write {}: {e:#}", html_path.display()))?;

    log::info!(
        "HTML table generated successfully at {} ({} rows)",
        html_path.display(),
        table.rows.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::COLUMNS;

    fn table(rows: Vec<Vec<&str>>) -> Table {
        Table {
            headers: COLUMNS.map(String::from).to_vec(),
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        }
    }

    #[test]
    fn renders_one_body_row_with_link_anchor() {
        let html = render_page(&table(vec![vec![
            "HackerNews",
            "Engineer",
            "N/A",
            "https://x/1",
        ]]));

        assert_eq!(html.matches("<tr>").count(), 2); // head + one body row
        assert!(html.contains("<td data-label=\"Source\">HackerNews</td>"));
        assert!(html.contains("<td data-label=\"Titre\">Engineer</td>"));
        assert!(html.contains("<td data-label=\"Entreprise\">N/A</td>"));
        assert!(html.contains(
            "<td data-label=\"Lien\"><a href=\"https://x/1\">https://x/1</a></td>"
        ));
    }

    #[test]
    fn empty_table_renders_valid_document_without_rows() {
        let html = render_page(&table(vec![]));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<tbody>"));
        assert_eq!(html.matches("<tr>").count(), 1); // header row only
        for col in COLUMNS {
            assert!(html.contains(&format!("<th>{col}</th>")));
        }
    }

    #[test]
    fn cell_text_is_escaped() {
        let html = render_page(&table(vec![vec![
            "HackerNews",
            "<script>alert('x')</script>",
            "Tom & \"Jerry\"",
            "https://x/1?a=1&b=2",
        ]]));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
        assert!(html.contains("<a href=\"https://x/1?a=1&amp;b=2\">"));
    }

    #[test]
    fn scheme_casing_does_not_affect_linkability() {
        let html = render_page(&table(vec![vec![
            "HackerNews",
            "Engineer",
            "N/A",
            "Https://x/1",
        ]]));
        assert!(html.contains("<a href=\"Https://x/1\">Https://x/1</a>"));

        let html = render_page(&table(vec![vec![
            "HackerNews",
            "Engineer",
            "N/A",
            "HTTP://x/1",
        ]]));
        assert!(html.contains("<a href=\"HTTP://x/1\">HTTP://x/1</a>"));
    }

    #[test]
    fn non_http_link_values_do_not_become_anchors() {
        let html = render_page(&table(vec![vec![
            "HackerNews",
            "Engineer",
            "N/A",
            "javascript:alert(1)",
        ]]));

        assert!(!html.contains("<a href"));
        assert!(html.contains("<td data-label=\"Lien\">javascript:alert(1)</td>"));
    }

    #[test]
    fn write_page_creates_missing_directories() {
        let dir = std::env::temp_dir()
            .join(format!("jobboard-render-{}", std::process::id()));
        let path = dir.join("public/index.html");

        write_page(&path, "<!DOCTYPE html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<!DOCTYPE html>");
    }

    #[test]
    fn missing_table_aborts_before_any_output_is_written() {
        let dir = std::env::temp_dir()
            .join(format!("jobboard-render-missing-{}", std::process::id()));
        let csv_path = dir.join("data/jobs.csv");
        let html_path = dir.join("public/index.html");

        let err = render_to_file(&csv_path, &html_path).unwrap_err();
        assert!(store::is_not_found(&err));
        assert!(!html_path.exists());
    }

    #[test]
    fn render_to_file_regenerates_the_page_from_the_table() {
        let dir = std::env::temp_dir()
            .join(format!("jobboard-render-full-{}", std::process::id()));
        let csv_path = dir.join("data/jobs.csv");
        let html_path = dir.join("public/index.html");

        let records = vec![crate::schema::JobRecord {
            source: "hackernews".into(),
            title: "Engineer".into(),
            company: "N/A".into(),
            link: "https://x/1".into(),
        }];
        store::write_table(&csv_path, &records).unwrap();

        render_to_file(&csv_path, &html_path).unwrap();
        let written = fs::read_to_string(&html_path).unwrap();
        assert!(written.contains("<a href=\"https://x/1\">https://x/1</a>"));
    }
}
