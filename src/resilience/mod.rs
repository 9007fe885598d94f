//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Failed relay config sync:
//!     → backoff.rs (jittered exponential delay)
//!     → Refresher retries after the delay
//!     → success resets the schedule
//! ```
//!
//! # Design Decisions
//! - Retry policy lives with the caller; the configurator never retries
//! - Jittered backoff prevents thundering herd on a shared provider

pub mod backoff;
