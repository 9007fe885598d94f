//! Daemon command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::RouterConfig;

#[derive(Debug, Parser)]
#[command(name = "relay-router")]
#[command(about = "Resolves and hot-reloads relay endpoints per proposer", long_about = None, version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Relay URL (`scheme://0x<pubkey>@host`); repeatable or comma separated
    #[arg(long = "relay", alias = "relays", value_name = "URL", value_delimiter = ',')]
    pub relays: Vec<String>,

    /// Relay monitor URL; repeatable or comma separated
    #[arg(long = "relay-monitor", alias = "relay-monitors", value_name = "URL", value_delimiter = ',')]
    pub relay_monitors: Vec<String>,

    /// JSON document with per-proposer relays
    #[arg(long, value_name = "FILE")]
    pub proposer_config: Option<PathBuf>,

    /// Sync as soon as the proposer config file changes
    #[arg(long)]
    pub watch: bool,

    /// Seconds between scheduled syncs
    #[arg(long, value_name = "SECS")]
    pub sync_interval: Option<u64>,

    /// Admin API bind address
    #[arg(long, value_name = "ADDR")]
    pub admin_address: Option<String>,

    /// Serve Prometheus metrics on this address
    #[arg(long, value_name = "ADDR")]
    pub metrics_address: Option<String>,

    /// Default log filter (RUST_LOG takes precedence)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Layer command-line values over the file configuration.
    ///
    /// Relays and monitors are appended; scalar options replace file values.
    pub fn apply(&self, config: &mut RouterConfig) {
        config.provider.relays.extend(self.relays.iter().cloned());
        config.provider.relay_monitors.extend(self.relay_monitors.iter().cloned());

        if let Some(path) = &self.proposer_config {
            config.provider.proposer_config_file = Some(path.clone());
        }
        if self.watch {
            config.provider.watch = true;
        }
        if let Some(secs) = self.sync_interval {
            config.sync.interval_secs = secs;
        }
        if let Some(addr) = &self.admin_address {
            config.admin.enabled = true;
            config.admin.bind_address = addr.clone();
        }
        if let Some(addr) = &self.metrics_address {
            config.observability.metrics_enabled = true;
            config.observability.metrics_address = addr.clone();
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
    }
}
