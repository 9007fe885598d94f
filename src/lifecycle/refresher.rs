//! Periodic relay config refresh.
//!
//! # Responsibilities
//! - Run `Configurator::sync` on a fixed interval
//! - Sync immediately on external triggers (file change, SIGHUP, admin)
//! - Retry failed syncs with jittered backoff
//!
//! # Design Decisions
//! - Syncs run on the blocking pool; the provider fetch may be slow
//! - A retry is never scheduled later than the next regular sync
//! - Deadlines past the clock's range saturate instead of overflowing

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::time::{self, Instant};

use crate::config::SyncConfig;
use crate::observability::metrics;
use crate::rcm::Configurator;
use crate::resilience::backoff::Backoff;

/// Stand-in for "never" when a delay does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

fn deadline_after(delay: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(delay)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}

pub struct Refresher {
    configurator: Arc<Configurator>,
    interval: Duration,
    backoff: Backoff,
}

impl Refresher {
    pub fn new(configurator: Arc<Configurator>, config: &SyncConfig) -> Self {
        Self {
            configurator,
            interval: Duration::from_secs(config.interval_secs),
            backoff: Backoff::from_config(config),
        }
    }

    pub async fn run(mut self, mut triggers: mpsc::UnboundedReceiver<()>, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(interval_secs = self.interval.as_secs(), "Relay config refresher starting");

        metrics::record_snapshot(&self.configurator.snapshot());
        let mut next = deadline_after(self.interval);

        loop {
            tokio::select! {
                _ = time::sleep_until(next) => {}
                Some(()) = triggers.recv() => {
                    tracing::debug!("Sync requested");
                }
                _ = shutdown.recv() => {
                    tracing::info!("Refresher received shutdown signal, exiting loop");
                    break;
                }
            }

            let delay = self.sync_once().await;
            next = deadline_after(delay);
        }
    }

    /// Run one sync and return the delay until the next one.
    pub async fn sync_once(&mut self) -> Duration {
        let configurator = self.configurator.clone();
        let outcome = tokio::task::spawn_blocking(move || configurator.sync()).await;

        match outcome {
            Ok(Ok(())) => {
                self.backoff.reset();
                let snapshot = self.configurator.snapshot();
                metrics::record_sync(true);
                metrics::record_snapshot(&snapshot);
                tracing::info!(
                    generation = snapshot.generation(),
                    relays = snapshot.registry().all_relays().len(),
                    "Relay config synced"
                );
                self.interval
            }
            Ok(Err(e)) => {
                metrics::record_sync(false);
                let delay = self.backoff.next_delay().min(self.interval);
                tracing::warn!(
                    error = %e,
                    cause = %e.cause(),
                    attempt = self.backoff.attempts(),
                    retry_in_ms = delay.as_millis() as u64,
                    "Relay config sync failed, keeping previous relays"
                );
                delay
            }
            Err(e) => {
                metrics::record_sync(false);
                let delay = self.backoff.next_delay().min(self.interval);
                tracing::error!(error = %e, "Relay config sync task panicked");
                delay
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rcm::ProviderRegistryBuilder;
    use crate::rcp::{ProviderError, ProviderResponse};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn configurator(fail_after_first: bool, calls: Arc<AtomicUsize>) -> Arc<Configurator> {
        let relay = format!("https://0x{}@relay.example", "ab".repeat(48));
        let builder = ProviderRegistryBuilder::new(move || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            if fail_after_first && n > 0 {
                return Err(ProviderError::Unavailable("down".into()));
            }
            Ok(ProviderResponse {
                proposer_relays: Default::default(),
                default_relays: vec![relay.clone()],
            })
        });
        Arc::new(Configurator::with_builder(builder).unwrap())
    }

    fn sync_config() -> SyncConfig {
        SyncConfig {
            interval_secs: 60,
            retry_base_ms: 100,
            retry_max_ms: 1_000,
        }
    }

    #[tokio::test]
    async fn test_success_schedules_regular_interval() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut refresher = Refresher::new(configurator(false, calls.clone()), &sync_config());

        assert_eq!(refresher.sync_once().await, Duration::from_secs(60));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failure_schedules_backoff() {
        let calls = Arc::new(AtomicUsize::new(0));
        let sut = configurator(true, calls);
        let mut refresher = Refresher::new(sut.clone(), &sync_config());

        let first = refresher.sync_once().await;
        let second = refresher.sync_once().await;
        assert!(first < Duration::from_millis(200));
        assert!(second >= Duration::from_millis(200));
        assert_eq!(sut.snapshot().generation(), 1);
        assert_eq!(sut.all_relays().len(), 1);
    }

    #[test]
    fn test_deadline_saturates() {
        let now = Instant::now();
        assert!(deadline_after(Duration::from_secs(u64::MAX)) > now);
        assert!(deadline_after(Duration::from_secs(1)) <= Instant::now() + Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_huge_interval_keeps_running() {
        let calls = Arc::new(AtomicUsize::new(0));
        let config = SyncConfig {
            interval_secs: u64::MAX,
            ..sync_config()
        };
        let refresher = Refresher::new(configurator(false, calls.clone()), &config);
        let (trigger_tx, trigger_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

        let task = tokio::spawn(refresher.run(trigger_rx, shutdown_rx));

        for expected in 2..=3 {
            trigger_tx.send(()).unwrap();
            for _ in 0..50 {
                if calls.load(Ordering::SeqCst) >= expected {
                    break;
                }
                time::sleep(Duration::from_millis(20)).await;
            }
            assert_eq!(calls.load(Ordering::SeqCst), expected);
        }

        shutdown_tx.send(()).unwrap();
        time::timeout(Duration::from_secs(1), task).await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_trigger_and_shutdown() {
        let calls = Arc::new(AtomicUsize::new(0));
        let refresher = Refresher::new(configurator(false, calls.clone()), &sync_config());
        let (trigger_tx, trigger_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

        let task = tokio::spawn(refresher.run(trigger_rx, shutdown_rx));

        trigger_tx.send(()).unwrap();
        for _ in 0..50 {
            if calls.load(Ordering::SeqCst) >= 2 {
                break;
            }
            time::sleep(Duration::from_millis(20)).await;
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        shutdown_tx.send(()).unwrap();
        time::timeout(Duration::from_secs(1), task).await.unwrap().unwrap();
    }
}
