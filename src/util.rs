/// Utility helpers used by all source adapters.
///
/// This module contains:
/// - URL joining for page-relative hrefs
/// - Element text flattening
///
/// IMPORTANT:
/// - No source-specific business logic lives here.
/// - This module must remain lightweight and deterministic.
///
/// Source-specific behavior belongs in the adapter implementations.

use scraper::ElementRef;

/// Join a source's fixed base URL with an extracted href.
///
/// Page-relative paths are prefixed with the base; hrefs that are
/// already absolute (API sources, occasional external listings)
/// pass through unchanged.
///
/// Examples:
/// - ("https://www.python.org", "/jobs/77/")  -> "https://www.python.org/jobs/77/"
/// - ("https://news.ycombinator.com/", "item?id=1") -> "https://news.ycombinator.com/item?id=1"
/// - (_, "https://remotive.io/remote-jobs/x") -> unchanged
///
/// DESIGN NOTES:
/// - Purely textual, mirrors how each site happens to write its
///   hrefs. No RFC 3986 resolution is attempted.
pub fn join_url(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("{base}{href}")
    }
}

/// Flatten an element's text nodes into one trimmed string.
///
/// `scraper` yields text in fragments around nested tags; listing
/// titles regularly wrap spans, so fragments are concatenated
/// before trimming.
pub fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
