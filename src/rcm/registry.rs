//! Immutable relay registry snapshots.

use std::collections::BTreeMap;
use std::fmt;

use crate::relay::{RelayEntry, RelaySet};

/// Read-only view of the relays to contact per proposer.
pub trait RelayRegistry: Send + Sync + fmt::Debug {
    /// Every known relay: the defaults plus all proposer relays, deduplicated.
    fn all_relays(&self) -> Vec<RelayEntry>;

    /// The proposer's own relays, or the default relays when it has none.
    fn relays_for_validator(&self, public_key: &str) -> Vec<RelayEntry>;
}

/// Registry built from one provider response.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    proposers: BTreeMap<String, RelaySet>,
    defaults: RelaySet,
    /// Union of `proposers` and `defaults`, computed once.
    all: RelaySet,
}

impl Registry {
    /// Assemble a registry. Proposer keys are opaque and matched exactly.
    pub fn new<I>(proposers: I, defaults: RelaySet) -> Self
    where
        I: IntoIterator<Item = (String, RelaySet)>,
    {
        let mut by_key: BTreeMap<String, RelaySet> = BTreeMap::new();
        for (public_key, relays) in proposers {
            by_key.entry(public_key).or_default().extend(relays.iter().cloned());
        }

        let all = by_key
            .values()
            .fold(RelaySet::new(), |acc, relays| acc.union(relays))
            .union(&defaults);

        Self {
            proposers: by_key,
            defaults,
            all,
        }
    }

    pub fn default_relays(&self) -> &RelaySet {
        &self.defaults
    }

    pub fn proposer_relays(&self, public_key: &str) -> Option<&RelaySet> {
        self.proposers.get(public_key)
    }

    pub fn proposer_count(&self) -> usize {
        self.proposers.len()
    }
}

impl RelayRegistry for Registry {
    fn all_relays(&self) -> Vec<RelayEntry> {
        self.all.to_list()
    }

    fn relays_for_validator(&self, public_key: &str) -> Vec<RelayEntry> {
        self.proposer_relays(public_key)
            .unwrap_or(&self.defaults)
            .to_list()
    }
}
