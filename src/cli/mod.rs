//! Command-line surface of the daemon.
//!
//! # Responsibilities
//! - Define the clap argument set (args.rs)
//! - Accumulate repeated relay and monitor flags into deduplicated lists (flags.rs)
//!
//! # Design Decisions
//! - Flags only seed the static configuration; dynamic relay config comes from providers
//! - A repeated entry is an error, not silently dropped

pub mod args;
pub mod flags;

pub use args::Cli;
pub use flags::{FlagError, RelayList, RelayMonitorList};
