//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Configurator, Refresher, admin API produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (sync counters, registry gauges)
//!
//! Consumers:
//!     → stdout via tracing-subscriber
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields rather than formatted messages
//! - RUST_LOG overrides the configured filter
//! - Metrics go through the `metrics` facade; without a recorder they are no-ops

pub mod logging;
pub mod metrics;
