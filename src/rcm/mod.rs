//! Relay config management.
//!
//! # Data Flow
//! ```text
//! Configurator::sync
//!     → builder.rs (fetch from provider, parse every relay string)
//!     → registry.rs (immutable snapshot: proposer sets + default set)
//!     → configurator.rs (atomic swap of the installed snapshot)
//!
//! Lookups:
//!     relays_for_validator / all_relays
//!     → load the installed snapshot (no provider call, no lock)
//! ```
//!
//! # Design Decisions
//! - Snapshots are never mutated; every sync builds a brand-new one
//! - The replacement is built before the swap, outside any critical section
//! - A failed sync leaves the installed snapshot as it was
//! - Concurrent syncs race freely; the last swap wins

pub mod builder;
pub mod configurator;
pub mod error;
pub mod registry;

pub use builder::{ProviderRegistryBuilder, RegistryBuilder};
pub use configurator::{Configurator, Snapshot};
pub use error::{ConfiguratorError, RegistryError};
pub use registry::{Registry, RelayRegistry};
