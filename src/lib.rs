//! Relay router library: per-proposer relay resolution with hot reload.

pub mod admin;
pub mod cli;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod rcm;
pub mod rcp;
pub mod relay;
pub mod resilience;

pub use config::RouterConfig;
pub use rcm::Configurator;
pub use relay::{RelayEntry, RelaySet};
