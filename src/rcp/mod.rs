//! Relay config providers.
//!
//! # Data Flow
//! ```text
//! Configurator::sync
//!     → RegistryBuilder::build
//!     → RelayConfigProvider::fetch_config   (this module)
//!         - static_provider.rs (fixed command-line relays)
//!         - file.rs (proposer config document on disk)
//!     → ProviderResponse (raw strings, not yet validated)
//! ```
//!
//! # Design Decisions
//! - Providers are synchronous and opaque; timeouts belong to the transport
//! - Responses carry raw strings; parsing happens in the registry builder
//! - Any `Fn() -> Result<ProviderResponse, ProviderError>` is a provider

pub mod file;
pub mod static_provider;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use file::FileProvider;
pub use static_provider::StaticProvider;

/// Raw relay configuration as returned by a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// Proposer public key → relay strings.
    pub proposer_relays: HashMap<String, Vec<String>>,
    /// Relays used for proposers without their own entry.
    pub default_relays: Vec<String>,
}

/// Errors reported by a provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read relay config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse relay config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("relay config unavailable: {0}")]
    Unavailable(String),
}

/// Source of raw relay configuration.
pub trait RelayConfigProvider: Send + Sync {
    fn fetch_config(&self) -> Result<ProviderResponse, ProviderError>;
}

impl<F> RelayConfigProvider for F
where
    F: Fn() -> Result<ProviderResponse, ProviderError> + Send + Sync,
{
    fn fetch_config(&self) -> Result<ProviderResponse, ProviderError> {
        self()
    }
}
