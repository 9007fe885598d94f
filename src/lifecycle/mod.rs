//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Accumulate relay flags → Build first registry → Ready
//!
//! Refresh (refresher.rs):
//!     Interval tick / file change / SIGHUP / admin → Configurator::sync
//!     → success: new snapshot visible; failure: backoff, old snapshot kept
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGTERM/SIGINT → broadcast → refresher and admin server exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then the configurator, then listeners
//! - No first registry means no daemon
//! - Retry policy belongs here, not in the configurator

pub mod refresher;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use refresher::Refresher;
pub use shutdown::Shutdown;
