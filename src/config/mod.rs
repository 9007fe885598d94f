//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → command-line overrides (cli/args.rs)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!
//! On proposer config file change:
//!     watcher.rs detects change
//!     → Refresher runs Configurator::sync
//!     → registry snapshot swapped, or kept on failure
//! ```
//!
//! # Design Decisions
//! - The daemon config is read once; only relay config is hot-reloaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use schema::{AdminConfig, ObservabilityConfig, ProviderConfig, RouterConfig, SyncConfig};
