//! Registry construction.
//!
//! # Responsibilities
//! - Fetch one response from the relay config provider
//! - Parse every relay string of that response
//! - Produce a complete registry, or nothing

use std::collections::HashMap;

use crate::rcm::error::RegistryError;
use crate::rcm::registry::{Registry, RelayRegistry};
use crate::rcp::{ProviderResponse, RelayConfigProvider};
use crate::relay::{RelayEntry, RelaySet};

/// Builds one registry on demand. The configurator's only injection point.
pub trait RegistryBuilder: Send + Sync {
    fn build(&self) -> Result<Box<dyn RelayRegistry>, RegistryError>;
}

/// Builds [`Registry`] snapshots from a relay config provider.
#[derive(Debug, Clone)]
pub struct ProviderRegistryBuilder<P> {
    provider: P,
}

impl<P: RelayConfigProvider> ProviderRegistryBuilder<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: RelayConfigProvider> RegistryBuilder for ProviderRegistryBuilder<P> {
    fn build(&self) -> Result<Box<dyn RelayRegistry>, RegistryError> {
        let response = self.provider.fetch_config()?;
        Ok(Box::new(build_registry(response)?))
    }
}

/// Turn a provider response into a registry, failing on the first malformed relay.
pub fn build_registry(response: ProviderResponse) -> Result<Registry, RegistryError> {
    let mut proposers = HashMap::with_capacity(response.proposer_relays.len());
    for (public_key, relays) in response.proposer_relays {
        proposers.insert(public_key, parse_relays(&relays)?);
    }
    let defaults = parse_relays(&response.default_relays)?;

    Ok(Registry::new(proposers, defaults))
}

fn parse_relays(values: &[String]) -> Result<RelaySet, RegistryError> {
    values
        .iter()
        .map(|value| {
            RelayEntry::parse(value).map_err(|source| RegistryError::InvalidRelay {
                value: value.clone(),
                source,
            })
        })
        .collect()
}
