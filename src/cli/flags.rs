//! Accumulators for repeated relay flags.

use std::fmt;

use thiserror::Error;
use url::Url;

use crate::relay::{RelayEntry, RelayError, RelaySet};

#[derive(Debug, Error)]
pub enum FlagError {
    #[error("duplicate entry: {0}")]
    DuplicateEntry(String),

    #[error(transparent)]
    InvalidRelay(#[from] RelayError),

    #[error("invalid relay monitor URL {value:?}: {source}")]
    InvalidMonitor {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Relays given on the command line, in order of appearance.
#[derive(Debug, Clone, Default)]
pub struct RelayList(Vec<RelayEntry>);

impl RelayList {
    /// Parse and append one relay. An entry whose full string is already present is rejected.
    pub fn set(&mut self, value: &str) -> Result<(), FlagError> {
        let relay = RelayEntry::parse(value)?;
        if self.contains(&relay) {
            return Err(FlagError::DuplicateEntry(relay.to_string()));
        }
        self.0.push(relay);
        Ok(())
    }

    pub fn contains(&self, relay: &RelayEntry) -> bool {
        let needle = relay.to_string();
        self.0.iter().any(|entry| entry.to_string() == needle)
    }

    /// Accumulate every value, stopping at the first invalid or duplicate one.
    pub fn from_values<I, S>(values: I) -> Result<Self, FlagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for value in values {
            list.set(value.as_ref())?;
        }
        Ok(list)
    }

    pub fn entries(&self) -> &[RelayEntry] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_relay_set(&self) -> RelaySet {
        self.0.iter().cloned().collect()
    }
}

impl fmt::Display for RelayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&joined.join(","))
    }
}

/// Relay monitor endpoints given on the command line.
#[derive(Debug, Clone, Default)]
pub struct RelayMonitorList(Vec<Url>);

impl RelayMonitorList {
    pub fn set(&mut self, value: &str) -> Result<(), FlagError> {
        let monitor = Url::parse(value.trim()).map_err(|source| FlagError::InvalidMonitor {
            value: value.to_string(),
            source,
        })?;
        if self.contains(&monitor) {
            return Err(FlagError::DuplicateEntry(monitor.to_string()));
        }
        self.0.push(monitor);
        Ok(())
    }

    pub fn contains(&self, monitor: &Url) -> bool {
        self.0.iter().any(|entry| entry.as_str() == monitor.as_str())
    }

    pub fn from_values<I, S>(values: I) -> Result<Self, FlagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for value in values {
            list.set(value.as_ref())?;
        }
        Ok(list)
    }

    pub fn urls(&self) -> &[Url] {
        &self.0
    }
}

impl fmt::Display for RelayMonitorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.0.iter().map(Url::as_str).collect();
        f.write_str(&joined.join(","))
    }
}
