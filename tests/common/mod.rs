//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use alloy::primitives::FixedBytes;
use rand::Rng;
use relay_router::rcp::{ProviderError, ProviderResponse};
use relay_router::{RelayEntry, RelaySet};

/// A random proposer public key in `0x`-prefixed hex.
pub fn random_bls_public_key() -> String {
    let mut bytes = [0u8; 48];
    rand::thread_rng().fill(&mut bytes[..]);
    FixedBytes::<48>::from(bytes).to_string()
}

/// A relay with a random key on a random host.
pub fn random_relay() -> RelayEntry {
    let host: u64 = rand::thread_rng().gen();
    RelayEntry::parse(&format!("https://{}@relay-{host:x}.example", random_bls_public_key())).unwrap()
}

/// `n` relays with distinct URLs.
pub fn random_relay_set(n: usize) -> RelaySet {
    let mut set = RelaySet::new();
    while set.len() < n {
        set.add(random_relay());
    }
    set
}

/// `n` relays sharing one random URL but carrying different public keys.
pub fn relay_set_with_relays_having_the_same_url(n: usize) -> RelaySet {
    let host: u64 = rand::thread_rng().gen();
    (0..n)
        .map(|_| {
            RelayEntry::parse(&format!("https://{}@shared-{host:x}.example", random_bls_public_key())).unwrap()
        })
        .collect()
}

pub fn join_sets(a: &RelaySet, b: &RelaySet) -> RelaySet {
    a.union(b)
}

/// Sorted canonical URLs, for order-insensitive comparisons.
pub fn canonical(relays: &[RelayEntry]) -> Vec<String> {
    let mut urls: Vec<String> = relays.iter().map(|r| r.canonical_url().to_string()).collect();
    urls.sort();
    urls
}

pub fn assert_elements_match(want: &[RelayEntry], got: &[RelayEntry]) {
    assert_eq!(canonical(want), canonical(got));
}

/// Options for [`mock_provider`].
#[derive(Default)]
pub struct MockConfig {
    pub proposer_relays: HashMap<String, Vec<String>>,
    pub default_relays: Vec<String>,
    pub fail: bool,
}

impl MockConfig {
    pub fn with_proposer_relays(mut self, public_key: &str, relays: Vec<String>) -> Self {
        self.proposer_relays.insert(public_key.to_string(), relays);
        self
    }

    pub fn with_default_relays(mut self, relays: Vec<String>) -> Self {
        self.default_relays = relays;
        self
    }

    pub fn with_err(mut self) -> Self {
        self.fail = true;
        self
    }
}

/// A provider returning the same response (or error) on every call.
pub fn mock_provider(config: MockConfig) -> impl Fn() -> Result<ProviderResponse, ProviderError> + Send + Sync {
    move || {
        if config.fail {
            return Err(ProviderError::Unavailable("mock provider failure".into()));
        }
        Ok(ProviderResponse {
            proposer_relays: config.proposer_relays.clone(),
            default_relays: config.default_relays.clone(),
        })
    }
}

/// A provider that succeeds on the first call and fails on every later one.
pub fn once_only_successful_provider(
    public_key: &str,
    proposer_relays: &RelaySet,
    default_relays: &RelaySet,
) -> impl Fn() -> Result<ProviderResponse, ProviderError> + Send + Sync {
    let calls = AtomicUsize::new(0);
    let response = ProviderResponse {
        proposer_relays: HashMap::from([(public_key.to_string(), proposer_relays.to_string_slice())]),
        default_relays: default_relays.to_string_slice(),
    };

    move || {
        if calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(response.clone())
        } else {
            Err(ProviderError::Unavailable("provider went away".into()))
        }
    }
}
