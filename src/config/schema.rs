//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay router.
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the relay router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Where relay configuration comes from.
    pub provider: ProviderConfig,

    /// Background refresh settings.
    pub sync: SyncConfig,

    /// Admin API settings.
    pub admin: AdminConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Relay sources.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProviderConfig {
    /// Relays used for every proposer (`scheme://0x<pubkey>@host`).
    pub relays: Vec<String>,

    /// Relay monitor endpoints.
    pub relay_monitors: Vec<String>,

    /// Optional JSON document with per-proposer relays.
    pub proposer_config_file: Option<PathBuf>,

    /// Sync as soon as the proposer config file changes.
    pub watch: bool,
}

/// Refresh cadence and retry policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Seconds between scheduled syncs.
    pub interval_secs: u64,

    /// Base delay before retrying a failed sync.
    pub retry_base_ms: u64,

    /// Upper bound on the retry delay.
    pub retry_max_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            // one epoch
            interval_secs: 384,
            retry_base_ms: 500,
            retry_max_ms: 30_000,
        }
    }
}

/// Admin API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Serve the admin API.
    pub enabled: bool,

    /// Admin API bind address.
    pub bind_address: String,

    /// Bearer token required on every request, if set.
    pub api_key: Option<String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind_address: "127.0.0.1:18551".to_string(),
            api_key: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default tracing filter; `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Enable the Prometheus endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "relay_router=info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
