// ------------------------------------------------------------
// Module declarations
// ------------------------------------------------------------
//
// Each module represents a well-defined responsibility:
//
// - config:    Configuration structs loaded from JSON
// - schema:    The normalized job record and its column set
// - util:      Shared helper utilities (URL joining, text flattening)
// - sources:   Source adapters and adapter registry
// - collector: Fetch runner (HTTP + per-source containment) and aggregator
// - store:     CSV table writer / reader
// - render:    Static HTML page generation
//
pub mod config;
pub mod schema;
pub mod util;
pub mod sources;
pub mod collector;
pub mod store;
pub mod render;
