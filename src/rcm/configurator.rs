//! The relay configurator: installed registry, lookups and sync.
//!
//! # Responsibilities
//! - Hold the currently installed registry snapshot
//! - Serve lookups from that snapshot without touching the provider
//! - Replace the snapshot wholesale on a successful sync
//! - Keep the last good snapshot when a sync fails
//!
//! # Design Decisions
//! - The snapshot lives behind an `ArcSwap`; readers load it lock-free
//! - The replacement registry is fully built before the swap
//! - Syncs are not serialized; the last completed swap wins

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::SystemTime;

use arc_swap::ArcSwap;

use crate::rcm::builder::RegistryBuilder;
use crate::rcm::error::ConfiguratorError;
use crate::rcm::registry::RelayRegistry;
use crate::relay::RelayEntry;

/// One installed registry together with its install metadata.
#[derive(Debug)]
pub struct Snapshot {
    registry: Box<dyn RelayRegistry>,
    generation: u64,
    installed_at: SystemTime,
}

impl Snapshot {
    fn new(registry: Box<dyn RelayRegistry>, generation: u64) -> Self {
        Self {
            registry,
            generation,
            installed_at: SystemTime::now(),
        }
    }

    pub fn registry(&self) -> &dyn RelayRegistry {
        self.registry.as_ref()
    }

    /// Install counter; the first registry is generation 1.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn installed_at(&self) -> SystemTime {
        self.installed_at
    }
}

/// Serves relay lookups from the last successfully built registry.
pub struct Configurator {
    builder: Box<dyn RegistryBuilder>,
    installed: ArcSwap<Snapshot>,
    generations: AtomicU64,
}

impl Configurator {
    /// Build the first registry and return a ready configurator.
    ///
    /// # Panics
    ///
    /// Panics if `builder` is `None`. A missing builder is a wiring bug, not a
    /// runtime condition, and is reported before any provider call.
    pub fn new(builder: Option<Box<dyn RegistryBuilder>>) -> Result<Self, ConfiguratorError> {
        let Some(builder) = builder else {
            panic!("relay configurator requires a registry builder");
        };

        let registry = builder
            .build()
            .map_err(ConfiguratorError::CannotFetchRelayConfig)?;

        tracing::info!(
            relays = registry.all_relays().len(),
            "Relay configuration loaded"
        );

        Ok(Self {
            builder,
            installed: ArcSwap::from_pointee(Snapshot::new(registry, 1)),
            generations: AtomicU64::new(1),
        })
    }

    /// Shorthand for [`Configurator::new`] with a builder that is always present.
    pub fn with_builder(builder: impl RegistryBuilder + 'static) -> Result<Self, ConfiguratorError> {
        Self::new(Some(Box::new(builder)))
    }

    /// Build a fresh registry and install it.
    ///
    /// On failure the installed registry is left untouched and the error is
    /// returned; retrying is up to the caller.
    pub fn sync(&self) -> Result<(), ConfiguratorError> {
        let registry = match self.builder.build() {
            Ok(registry) => registry,
            Err(e) => {
                tracing::warn!(error = %e, "Relay config sync failed, keeping current registry");
                return Err(ConfiguratorError::CannotFetchRelayConfig(e));
            }
        };

        let generation = self.generations.fetch_add(1, Ordering::Relaxed) + 1;
        self.installed.store(Arc::new(Snapshot::new(registry, generation)));

        tracing::debug!(generation, "Installed new relay registry");
        Ok(())
    }

    /// Relays to contact for the given proposer.
    pub fn relays_for_validator(&self, public_key: &str) -> Vec<RelayEntry> {
        self.installed.load().registry().relays_for_validator(public_key)
    }

    /// Every relay of the installed registry.
    pub fn all_relays(&self) -> Vec<RelayEntry> {
        self.installed.load().registry().all_relays()
    }

    /// The installed snapshot, for callers that need several consistent reads.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.installed.load_full()
    }
}

impl std::fmt::Debug for Configurator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configurator")
            .field("installed", &self.installed.load_full())
            .finish_non_exhaustive()
    }
}
