//! OS signal handling.
//!
//! # Responsibilities
//! - SIGTERM/SIGINT → trigger graceful shutdown
//! - SIGHUP → request an immediate relay config sync
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - SIGHUP never shuts down, it only feeds the refresher

use tokio::sync::mpsc;

use crate::lifecycle::shutdown::Shutdown;

/// Translate OS signals until shutdown. Spawn this on the runtime.
#[cfg(unix)]
pub async fn listen(shutdown: Shutdown, sync_tx: mpsc::UnboundedSender<()>) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut hangup = signal(SignalKind::hangup())?;
    let mut stopped = shutdown.subscribe();

    loop {
        tokio::select! {
            _ = terminate.recv() => {
                tracing::info!("SIGTERM received, shutting down");
                break;
            }
            _ = interrupt.recv() => {
                tracing::info!("SIGINT received, shutting down");
                break;
            }
            _ = hangup.recv() => {
                tracing::info!("SIGHUP received, syncing relay config");
                let _ = sync_tx.send(());
            }
            _ = stopped.recv() => return Ok(()),
        }
    }

    shutdown.trigger();
    Ok(())
}

/// Translate Ctrl-C into shutdown on platforms without Unix signals.
#[cfg(not(unix))]
pub async fn listen(shutdown: Shutdown, _sync_tx: mpsc::UnboundedSender<()>) -> std::io::Result<()> {
    tokio::signal::ctrl_c().await?;
    tracing::info!("Ctrl-C received, shutting down");
    shutdown.trigger();
    Ok(())
}
