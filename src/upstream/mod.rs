//! Upstream country data source.
//!
//! # Data Flow
//! ```text
//! CountryClient::load_snapshot  → GET /v3.1/all         → Snapshot (empty on failure)
//! CountryClient::find_by_name   → GET /v3.1/name/{name} → first record (None on failure)
//! ```

pub mod client;
pub mod types;

pub use client::{decode_records, CountryClient};
pub use types::{UpstreamError, UpstreamResult};
