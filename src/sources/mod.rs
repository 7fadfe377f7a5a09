//! Source adapter registry and factory
//!
//! This module provides:
//! - Central registration of all supported job-listing sources
//! - A factory function to resolve adapters by name
//!
//! All site-specific logic must live in dedicated adapter modules.
//! The rest of the application must interact exclusively through
//! the `SourceAdapter` trait.

pub mod adapter;
pub mod hackernews;
pub mod python_org;
pub mod jsremotely;
mod remotive;
mod workingnomads;
mod authenticjobs;

use std::sync::Arc;
use adapter::SourceAdapter;

/// Returns a source adapter instance by name.
///
/// This function acts as the central factory / registry for all
/// supported sources.
///
/// DESIGN:
/// - Keeps adapter creation in one place
/// - Avoids string-based logic scattered across the codebase
/// - Enables compile-time visibility of supported sources
///
/// CONTRACT:
/// - `name` MUST match the `name` field in config.json
/// - Adapter names are lowercase and stable
///
/// RETURNS:
/// - `Some(Arc<dyn SourceAdapter>)` if the source is supported
/// - `None` if the source is unknown
pub fn get_adapter(name: &str) -> Option<Arc<dyn SourceAdapter>> {
    match name {
        "hackernews"    => Some(Arc::new(hackernews::HackerNewsAdapter)),
        "python_org"    => Some(Arc::new(python_org::PythonOrgAdapter)),
        "jsremotely"    => Some(Arc::new(jsremotely::JsRemotelyAdapter)),
        "remotive"      => Some(Arc::new(remotive::RemotiveAdapter)),
        "workingnomads" => Some(Arc::new(workingnomads::WorkingNomadsAdapter)),
        "authenticjobs" => Some(Arc::new(authenticjobs::AuthenticJobsAdapter)),
        _ => None,
    }
}
