use crate::schema::JobRecord;

/// SourceAdapter is the core abstraction layer between:
/// - The generic collector runtime
/// - Site-specific page layouts and payload shapes
///
/// Each source implementation must:
/// - Name itself and its listing URL
/// - Extract zero or more `JobRecord`s from a fetched body
///
/// DESIGN GOALS:
/// - Zero site-specific logic outside adapters
/// - One adapter per source
/// - Uniform output format across all sources
///
/// The runtime owns the HTTP request; `extract` is a pure function
/// of the response body, so every adapter can be exercised against
/// fixture markup without network access.
pub trait SourceAdapter: Send + Sync {

    /// Canonical source name.
    ///
    /// CONTRACT:
    /// - Must match the `name` field in configuration
    /// - Written verbatim into the `Source` column
    fn name(&self) -> &'static str;

    /// Listing URL fetched once per collect run.
    fn url(&self) -> &'static str;

    /// Extracts job records from a fetched response body.
    ///
    /// INPUT:
    /// - `body`: full response text (HTML for page sources, JSON
    ///   for API sources)
    ///
    /// OUTPUT:
    /// - Records in the page's natural listing order. Empty when
    ///   nothing matches the source's structural selector, and on
    ///   payload-decode failure.
    ///
    /// IMPORTANT:
    /// - This function must NEVER panic on arbitrary input
    /// - A candidate missing its title or link-bearing anchor is
    ///   skipped silently, never emitted partially
    /// - Decode failures on structured payloads are logged with the
    ///   raw payload before returning empty
    fn extract(&self, body: &str) -> Vec<JobRecord>;
}
