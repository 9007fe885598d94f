//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Require at least one relay source
//! - Validate value ranges (interval within bounds, retry bounds ordered)
//! - Check that bind addresses parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Relay strings are not parsed here; the command-line flag layer does that

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RouterConfig;

/// Longest accepted sync interval: one week.
pub const MAX_SYNC_INTERVAL_SECS: u64 = 7 * 24 * 60 * 60;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no relays configured: set provider.relays or provider.proposer_config_file")]
    NoRelaySource,

    #[error("sync.interval_secs must be greater than zero")]
    ZeroSyncInterval,

    #[error("sync.interval_secs ({0}) exceeds the maximum of {MAX_SYNC_INTERVAL_SECS}")]
    SyncIntervalTooLong(u64),

    #[error("sync.retry_base_ms ({base}) exceeds sync.retry_max_ms ({max})")]
    RetryBounds { base: u64, max: u64 },

    #[error("provider.watch requires provider.proposer_config_file")]
    WatchWithoutFile,

    #[error("invalid {field} address {value:?}")]
    InvalidAddress { field: &'static str, value: String },
}

/// Check the configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.provider.relays.is_empty() && config.provider.proposer_config_file.is_none() {
        errors.push(ValidationError::NoRelaySource);
    }

    if config.provider.watch && config.provider.proposer_config_file.is_none() {
        errors.push(ValidationError::WatchWithoutFile);
    }

    if config.sync.interval_secs == 0 {
        errors.push(ValidationError::ZeroSyncInterval);
    } else if config.sync.interval_secs > MAX_SYNC_INTERVAL_SECS {
        errors.push(ValidationError::SyncIntervalTooLong(config.sync.interval_secs));
    }

    if config.sync.retry_base_ms > config.sync.retry_max_ms {
        errors.push(ValidationError::RetryBounds {
            base: config.sync.retry_base_ms,
            max: config.sync.retry_max_ms,
        });
    }

    if config.admin.enabled && config.admin.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "admin.bind_address",
            value: config.admin.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_needs_relays() {
        let errors = validate_config(&RouterConfig::default()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::NoRelaySource]);
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RouterConfig::default();
        config.provider.watch = true;
        config.sync.interval_secs = 0;
        config.sync.retry_base_ms = 10_000;
        config.sync.retry_max_ms = 100;
        config.admin.bind_address = "not-an-address".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::ZeroSyncInterval));
        assert!(errors.contains(&ValidationError::RetryBounds { base: 10_000, max: 100 }));
    }

    #[test]
    fn test_rejects_overlong_sync_interval() {
        let mut config = RouterConfig::default();
        config.provider.relays.push("https://0xabc@relay.example".into());

        config.sync.interval_secs = MAX_SYNC_INTERVAL_SECS;
        assert!(validate_config(&config).is_ok());

        config.sync.interval_secs = u64::MAX;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::SyncIntervalTooLong(u64::MAX)]
        );
    }

    #[test]
    fn test_valid_config() {
        let mut config = RouterConfig::default();
        config.provider.relays.push("https://0xabc@relay.example".into());
        assert!(validate_config(&config).is_ok());
    }
}
