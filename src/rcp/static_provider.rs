//! Provider serving a fixed set of relays.

use crate::rcp::{ProviderError, ProviderResponse, RelayConfigProvider};
use crate::relay::RelaySet;

/// Serves the relays given at startup as default relays for every proposer.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    relays: RelaySet,
}

impl StaticProvider {
    pub fn new(relays: RelaySet) -> Self {
        Self { relays }
    }
}

impl RelayConfigProvider for StaticProvider {
    fn fetch_config(&self) -> Result<ProviderResponse, ProviderError> {
        Ok(ProviderResponse {
            proposer_relays: Default::default(),
            default_relays: self.relays.to_string_slice(),
        })
    }
}
