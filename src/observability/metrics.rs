//! Metrics collection and exposition.
//!
//! # Metrics
//! - `mirrorlist_requests_total` (counter): requests by method, status
//! - `mirrorlist_request_duration_seconds` (histogram): latency distribution

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter started"),
        Err(e) => tracing::error!(error = %e, "Failed to start metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, started: Instant) {
    counter!(
        "mirrorlist_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!("mirrorlist_request_duration_seconds").record(started.elapsed().as_secs_f64());
}
