//! A single relay endpoint.
//!
//! # Responsibilities
//! - Parse `scheme://0x<pubkey>@host[:port][/path]` into a typed entry
//! - Validate the embedded BLS public key
//! - Expose the canonical URL used for identity and deduplication

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use alloy::primitives::FixedBytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use url::Url;

/// 48-byte BLS public key of a relay or proposer.
pub type BlsPublicKey = FixedBytes<48>;

/// Errors produced while parsing a relay entry.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The string is not a valid URL.
    #[error("invalid relay URL {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// Only http and https relays are supported.
    #[error("unsupported relay scheme {0:?}")]
    UnsupportedScheme(String),

    /// The URL carries no user-info public key.
    #[error("missing relay public key in {0:?}")]
    MissingPublicKey(String),

    /// The user-info is not a 48-byte hex public key.
    #[error("invalid relay public key {0:?}")]
    InvalidPublicKey(String),

    /// The URL has no host to strip credentials from.
    #[error("relay URL {0:?} has no host")]
    MissingHost(String),
}

/// An upstream relay, identified by its canonical URL.
///
/// Two entries are equal when their canonical URLs match, even if the
/// embedded public keys differ.
#[derive(Debug, Clone)]
pub struct RelayEntry {
    public_key: BlsPublicKey,
    /// Full URL as supplied, including the public key.
    url: Url,
    /// URL with user-info removed.
    base: Url,
}

impl RelayEntry {
    /// Parse a relay entry. A missing scheme defaults to `http://`.
    pub fn parse(value: &str) -> Result<Self, RelayError> {
        let value = value.trim();
        let raw = if value.contains("://") {
            value.to_string()
        } else {
            format!("http://{value}")
        };

        let url = Url::parse(&raw).map_err(|source| RelayError::InvalidUrl {
            value: value.to_string(),
            source,
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(RelayError::UnsupportedScheme(other.to_string())),
        }

        if url.username().is_empty() {
            return Err(RelayError::MissingPublicKey(value.to_string()));
        }

        let public_key = BlsPublicKey::from_str(url.username())
            .map_err(|_| RelayError::InvalidPublicKey(url.username().to_string()))?;

        let mut base = url.clone();
        base.set_username("")
            .map_err(|_| RelayError::MissingHost(value.to_string()))?;
        base.set_password(None)
            .map_err(|_| RelayError::MissingHost(value.to_string()))?;

        Ok(Self { public_key, url, base })
    }

    /// The relay's BLS public key.
    pub fn public_key(&self) -> &BlsPublicKey {
        &self.public_key
    }

    /// The full relay URL, public key included.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Canonical identity of the relay: the URL without user-info.
    pub fn canonical_url(&self) -> &str {
        self.base.as_str()
    }
}

impl PartialEq for RelayEntry {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_url() == other.canonical_url()
    }
}

impl Eq for RelayEntry {}

impl Hash for RelayEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_url().hash(state);
    }
}

impl fmt::Display for RelayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

impl FromStr for RelayEntry {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for RelayEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RelayEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
