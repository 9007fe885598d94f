//! Relay identities.
//!
//! # Data Flow
//! ```text
//! "https://0x<pubkey>@relay.example"
//!     → entry.rs (parse, validate public key, derive canonical URL)
//!     → set.rs (deduplicate by canonical URL, union, enumerate)
//!     → consumed by the registry builder and the command-line flags
//! ```
//!
//! # Design Decisions
//! - A relay is identified by where it is reachable; the public key is carried
//!   along but does not take part in equality
//! - Sets are values: union produces a new set, inputs are untouched
//! - Enumeration order is stable within a set but carries no meaning

pub mod entry;
pub mod set;

pub use entry::{BlsPublicKey, RelayEntry, RelayError};
pub use set::RelaySet;
