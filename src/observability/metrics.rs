//! Metrics collection and exposition.
//!
//! # Metrics
//! - `geo_glimpse_upstream_requests_total` (counter): upstream fetches by endpoint, outcome
//! - `geo_glimpse_upstream_request_duration_seconds` (histogram): upstream latency
//! - `geo_glimpse_pages_rendered_total` (counter): rendered pages by kind
//! - `geo_glimpse_snapshot_records` (gauge): records in the current snapshot
//! - `geo_glimpse_skipped_records_total` (counter): upstream records that failed to decode
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Exporter is optional and off by default

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record the outcome of one upstream request.
pub fn record_upstream(endpoint: &'static str, outcome: &'static str, start: Instant) {
    counter!(
        "geo_glimpse_upstream_requests_total",
        "endpoint" => endpoint,
        "outcome" => outcome
    )
    .increment(1);
    histogram!(
        "geo_glimpse_upstream_request_duration_seconds",
        "endpoint" => endpoint
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a rendered page.
pub fn record_page(kind: &'static str) {
    counter!("geo_glimpse_pages_rendered_total", "kind" => kind).increment(1);
}

/// Record the size of the loaded snapshot.
pub fn record_snapshot_size(records: usize) {
    gauge!("geo_glimpse_snapshot_records").set(records as f64);
}

/// Record upstream records dropped because they failed to decode.
pub fn record_skipped_records(count: usize) {
    counter!("geo_glimpse_skipped_records_total").increment(count as u64);
}
