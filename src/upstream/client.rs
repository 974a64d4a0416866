//! Country API client.
//!
//! # Responsibilities
//! - Fetch every record (`GET /v3.1/all`)
//! - Fetch records by name (`GET /v3.1/name/{name}`)
//! - Convert any failure into an empty result at the call site
//! - Skip individual records that fail to decode
//!
//! # Design Decisions
//! - One attempt per fetch: no retries, no backoff
//! - The configured timeout bounds each request
//! - Failures are logged once here and never reach renderers

use std::time::{Duration, Instant};

use url::Url;

use crate::config::UpstreamConfig;
use crate::country::{CountryRecord, Snapshot};
use crate::observability::metrics;
use crate::upstream::types::{UpstreamError, UpstreamResult};

const API_VERSION: &str = "v3.1";

/// HTTP client for the country API.
#[derive(Clone)]
pub struct CountryClient {
    http: reqwest::Client,
    base_url: Url,
    fields: Vec<String>,
}

impl CountryClient {
    /// Create a client from configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|_| UpstreamError::InvalidUrl(config.base_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("geo-glimpse/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            fields: config.fields.clone(),
        })
    }

    /// URL of the bulk endpoint.
    pub fn all_url(&self) -> UpstreamResult<Url> {
        let mut url = self.endpoint(&["all"])?;
        if !self.fields.is_empty() {
            url.query_pairs_mut()
                .append_pair("fields", &self.fields.join(","));
        }
        Ok(url)
    }

    /// URL of the by-name endpoint. `name` is percent-encoded as one segment.
    pub fn name_url(&self, name: &str) -> UpstreamResult<Url> {
        self.endpoint(&["name", name])
    }

    fn endpoint(&self, segments: &[&str]) -> UpstreamResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(API_VERSION)
            .extend(segments);
        Ok(url)
    }

    /// Fetch every record in upstream order.
    pub async fn fetch_all(&self) -> UpstreamResult<Vec<CountryRecord>> {
        let url = self.all_url()?;
        self.get_records("all", url).await
    }

    /// Fetch the records whose name matches `name`.
    pub async fn fetch_by_name(&self, name: &str) -> UpstreamResult<Vec<CountryRecord>> {
        let url = self.name_url(name)?;
        self.get_records("name", url).await
    }

    async fn get_records(&self, endpoint: &'static str, url: Url) -> UpstreamResult<Vec<CountryRecord>> {
        let start = Instant::now();
        tracing::debug!(url = %url, "Fetching from upstream");

        let result = self.send(url).await;

        let outcome = if result.is_ok() { "ok" } else { "error" };
        metrics::record_upstream(endpoint, outcome, start);
        result
    }

    async fn send(&self, url: Url) -> UpstreamResult<Vec<CountryRecord>> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }
        let body = response.bytes().await?;
        decode_records(&body)
    }

    /// Bulk fetch that never fails: errors become an empty snapshot.
    pub async fn load_snapshot(&self) -> Snapshot {
        match self.fetch_all().await {
            Ok(records) => {
                tracing::info!(count = records.len(), "Fetched country snapshot");
                let snapshot = Snapshot::new(records);
                metrics::record_snapshot_size(snapshot.len());
                snapshot
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching countries");
                metrics::record_snapshot_size(0);
                Snapshot::empty()
            }
        }
    }

    /// By-name fetch that never fails: errors and empty answers become `None`.
    pub async fn find_by_name(&self, name: &str) -> Option<CountryRecord> {
        match self.fetch_by_name(name).await {
            Ok(records) => records.into_iter().next(),
            Err(e) => {
                tracing::error!(name = %name, error = %e, "Error fetching country");
                None
            }
        }
    }
}

/// Decode a JSON array of records one element at a time.
///
/// A body that is not an array is an error. Elements that fail to decode
/// are logged and skipped so one bad record never hides the rest.
pub fn decode_records(body: &[u8]) -> UpstreamResult<Vec<CountryRecord>> {
    let values: Vec<serde_json::Value> = serde_json::from_slice(body)?;
    let total = values.len();

    let mut records = Vec::with_capacity(total);
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<CountryRecord>(value) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!(index, error = %e, "Skipping undecodable country record"),
        }
    }

    let skipped = total - records.len();
    if skipped > 0 {
        metrics::record_skipped_records(skipped);
    }
    Ok(records)
}

impl std::fmt::Debug for CountryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryClient")
            .field("base_url", &self.base_url.as_str())
            .field("fields", &self.fields)
            .finish()
    }
}
