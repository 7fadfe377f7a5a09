use serde::{Serialize, Deserialize};

/// Sentinel written into the company column when a source page
/// carries no extractable company field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Fixed CSV column set, in file order.
///
/// The header names are part of the external interface: the renderer
/// keys its hyperlink column off `LINK_COLUMN`, and downstream
/// consumers of `data/jobs.csv` rely on these exact names.
pub const COLUMNS: [&str; 4] = ["Source", "Titre", "Entreprise", "Lien"];

/// Header name of the column rendered as a hyperlink.
pub const LINK_COLUMN: &str = "Lien";

/// One normalized job listing.
///
/// This is the single record shape shared by every source adapter,
/// the CSV store and the renderer.
///
/// INVARIANTS:
/// - `source` matches the emitting adapter's canonical name
/// - `title` is non-empty when extraction succeeded
/// - `company` falls back to `NOT_AVAILABLE`, never an empty marker
/// - `link` is an absolute URL (base-prefixed or API-provided)
///
/// A candidate that cannot produce a title and a link is dropped by
/// its adapter instead of being emitted partially.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JobRecord {
    /// Source identifier (e.g. "hackernews", "remotive")
    pub source: String,

    /// Free-text job title, as listed on the source page
    pub title: String,

    /// Company name, or `NOT_AVAILABLE`
    pub company: String,

    /// Absolute URL of the listing
    pub link: String,
}

impl JobRecord {
    /// Cells in `COLUMNS` order, ready for the CSV writer.
    pub fn cells(&self) -> [&str; 4] {
        [&self.source, &self.title, &self.company, &self.link]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_follow_column_order() {
        let rec = JobRecord {
            source: "hackernews".into(),
            title: "Engineer".into(),
            company: NOT_AVAILABLE.into(),
            link: "https://x/1".into(),
        };
        assert_eq!(rec.cells(), ["hackernews", "Engineer", "N/A", "https://x/1"]);
        assert_eq!(COLUMNS.len(), rec.cells().len());
    }
}
