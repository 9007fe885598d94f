//! Deduplicated collections of relays.

use std::collections::BTreeMap;

use crate::relay::entry::RelayEntry;

/// A set of relays, unique by canonical URL.
///
/// When two entries share a canonical URL the first one added is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelaySet {
    entries: BTreeMap<String, RelayEntry>,
}

impl RelaySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Returns false if a relay with the same canonical URL is already present.
    pub fn add(&mut self, entry: RelayEntry) -> bool {
        use std::collections::btree_map::Entry;

        match self.entries.entry(entry.canonical_url().to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn contains(&self, entry: &RelayEntry) -> bool {
        self.entries.contains_key(entry.canonical_url())
    }

    /// Merge two sets into a new one; entries of `self` win over `other`.
    pub fn union(&self, other: &RelaySet) -> RelaySet {
        let mut merged = self.clone();
        for entry in other.iter() {
            merged.add(entry.clone());
        }
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = &RelayEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_list(&self) -> Vec<RelayEntry> {
        self.entries.values().cloned().collect()
    }

    /// Full textual form of every entry, public keys included.
    pub fn to_string_slice(&self) -> Vec<String> {
        self.entries.values().map(ToString::to_string).collect()
    }
}

impl FromIterator<RelayEntry> for RelaySet {
    fn from_iter<T: IntoIterator<Item = RelayEntry>>(iter: T) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.add(entry);
        }
        set
    }
}

impl Extend<RelayEntry> for RelaySet {
    fn extend<T: IntoIterator<Item = RelayEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.add(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::entry::RelayError;

    fn relay(key_byte: &str, host: &str) -> String {
        format!("https://0x{}@{}", key_byte.repeat(48), host)
    }

    fn parse_all<S: AsRef<str>>(values: &[S]) -> Result<RelaySet, RelayError> {
        values.iter().map(|value| RelayEntry::parse(value.as_ref())).collect()
    }

    #[test]
    fn test_deduplicates_by_canonical_url() {
        let set = parse_all(&[
            relay("aa", "relay-a.example"),
            relay("bb", "relay-b.example"),
            relay("aa", "relay-a.example"),
        ])
        .unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_rejects_malformed_strings() {
        let err = parse_all(&[relay("aa", "relay-a.example"), "not a relay".to_string()]);
        assert!(err.is_err());
    }

    #[test]
    fn test_union_keeps_first_seen() {
        let first = parse_all(&[relay("aa", "relay.example")]).unwrap();
        let second = parse_all(&[relay("bb", "relay.example"), relay("cc", "other.example")]).unwrap();

        let merged = first.union(&second);
        assert_eq!(merged.len(), 2);

        let kept = merged.iter().find(|e| e.canonical_url() == "https://relay.example/").unwrap();
        assert_eq!(kept.public_key().to_string(), format!("0x{}", "aa".repeat(48)));

        // inputs untouched
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_contains_and_enumeration() {
        let set = parse_all(&[relay("aa", "relay-a.example"), relay("bb", "relay-b.example")]).unwrap();
        let other_key = RelayEntry::parse(&relay("cc", "relay-b.example")).unwrap();
        assert!(set.contains(&other_key));

        let strings = set.to_string_slice();
        assert_eq!(strings.len(), 2);
        assert_eq!(parse_all(strings.as_slice()).unwrap(), set);
        assert_eq!(set.to_list().len(), 2);
    }
}
