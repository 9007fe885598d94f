//! Registry and configurator error types.

use thiserror::Error;

use crate::rcp::ProviderError;
use crate::relay::RelayError;

/// Why a registry could not be built.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("relay config provider failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("invalid relay {value:?} in relay config: {source}")]
    InvalidRelay {
        value: String,
        #[source]
        source: RelayError,
    },
}

/// Errors surfaced by the configurator.
#[derive(Debug, Error)]
pub enum ConfiguratorError {
    /// No registry could be built; the installed one, if any, is unchanged.
    #[error("cannot fetch relay config")]
    CannotFetchRelayConfig(#[source] RegistryError),
}

impl ConfiguratorError {
    /// The underlying build failure.
    pub fn cause(&self) -> &RegistryError {
        match self {
            ConfiguratorError::CannotFetchRelayConfig(cause) => cause,
        }
    }
}
