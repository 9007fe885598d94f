//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_sync_total` (counter): sync attempts by `result` (success, failure)
//! - `relay_registry_relays` (gauge): size of the installed AllRelays view
//! - `relay_registry_generation` (gauge): install counter of the snapshot

use std::net::SocketAddr;

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::rcm::Snapshot;

/// Install the Prometheus recorder and serve `/metrics` on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    describe_counter!("relay_sync_total", "Relay config sync attempts by result");
    describe_gauge!("relay_registry_relays", "Relays in the installed registry");
    describe_gauge!("relay_registry_generation", "Generation of the installed registry");

    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record the outcome of one sync attempt.
pub fn record_sync(success: bool) {
    let result = if success { "success" } else { "failure" };
    counter!("relay_sync_total", "result" => result).increment(1);
}

/// Publish gauges describing the installed snapshot.
pub fn record_snapshot(snapshot: &Snapshot) {
    gauge!("relay_registry_relays").set(snapshot.registry().all_relays().len() as f64);
    gauge!("relay_registry_generation").set(snapshot.generation() as f64);
}
