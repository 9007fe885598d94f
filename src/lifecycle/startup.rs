//! Startup wiring.
//!
//! # Responsibilities
//! - Turn the validated configuration into a relay config provider
//! - Build the configurator with its first registry
//!
//! # Design Decisions
//! - Fail fast: no first registry, no daemon
//! - Command-line relays become defaults, appended to file defaults when both exist

use std::sync::Arc;

use thiserror::Error;

use crate::cli::{FlagError, RelayList, RelayMonitorList};
use crate::config::RouterConfig;
use crate::rcm::{Configurator, ConfiguratorError, ProviderRegistryBuilder, RegistryBuilder};
use crate::rcp::{FileProvider, StaticProvider};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid relay flags: {0}")]
    Flags(#[from] FlagError),

    #[error(transparent)]
    Configurator(#[from] ConfiguratorError),
}

/// Static relay inputs after flag accumulation.
#[derive(Debug, Clone, Default)]
pub struct StaticRelays {
    pub relays: RelayList,
    pub monitors: RelayMonitorList,
}

impl StaticRelays {
    pub fn from_config(config: &RouterConfig) -> Result<Self, FlagError> {
        Ok(Self {
            relays: RelayList::from_values(&config.provider.relays)?,
            monitors: RelayMonitorList::from_values(&config.provider.relay_monitors)?,
        })
    }
}

/// Pick the registry builder for the configured relay sources.
pub fn registry_builder(config: &RouterConfig, relays: &RelayList) -> Box<dyn RegistryBuilder> {
    match &config.provider.proposer_config_file {
        Some(path) => {
            let extra = relays.to_relay_set().to_string_slice();
            Box::new(ProviderRegistryBuilder::new(
                FileProvider::new(path).with_default_relays(extra),
            ))
        }
        None => Box::new(ProviderRegistryBuilder::new(StaticProvider::new(
            relays.to_relay_set(),
        ))),
    }
}

/// Accumulate relay flags and build a ready configurator.
pub fn build_configurator(config: &RouterConfig) -> Result<(Arc<Configurator>, StaticRelays), StartupError> {
    let statics = StaticRelays::from_config(config)?;

    tracing::info!(
        relays = %statics.relays,
        relay_monitors = %statics.monitors,
        proposer_config_file = ?config.provider.proposer_config_file,
        "Relay sources configured"
    );

    let configurator = Configurator::new(Some(registry_builder(config, &statics.relays)))?;
    Ok((Arc::new(configurator), statics))
}
