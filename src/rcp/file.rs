//! Provider reading a proposer config document from disk.
//!
//! The document is re-read on every fetch so that edits are picked up by the
//! next sync:
//!
//! ```json
//! {
//!   "proposer_config": {
//!     "0x8f7b...": { "relays": ["https://0x...@relay-a.example"] }
//!   },
//!   "default_config": { "relays": ["https://0x...@relay-b.example"] }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::rcp::{ProviderError, ProviderResponse, RelayConfigProvider};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProposerConfigFile {
    proposer_config: HashMap<String, RelayOptions>,
    default_config: RelayOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RelayOptions {
    relays: Vec<String>,
}

/// Reads relay configuration from a JSON file.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
    /// Relays appended to the file's default relays.
    extra_defaults: Vec<String>,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            extra_defaults: Vec::new(),
        }
    }

    /// Append relays (typically from the command line) to every response's defaults.
    pub fn with_default_relays(mut self, relays: Vec<String>) -> Self {
        self.extra_defaults = relays;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RelayConfigProvider for FileProvider {
    fn fetch_config(&self) -> Result<ProviderResponse, ProviderError> {
        let content = fs::read_to_string(&self.path)?;
        let document: ProposerConfigFile = serde_json::from_str(&content)?;

        let proposer_relays = document
            .proposer_config
            .into_iter()
            .map(|(proposer, options)| (proposer, options.relays))
            .collect();

        let mut default_relays = document.default_config.relays;
        default_relays.extend(self.extra_defaults.iter().cloned());

        tracing::debug!(
            path = ?self.path,
            default_relays = default_relays.len(),
            "Read proposer config file"
        );

        Ok(ProviderResponse {
            proposer_relays,
            default_relays,
        })
    }
}
