//! Relay router daemon.
//!
//! # Architecture Overview
//!
//! ```text
//!   proposer config file ──┐        ┌──────────────────────────────────────┐
//!   command-line relays ───┼──────▶ │ rcp: RelayConfigProvider             │
//!                          │        └──────────────┬───────────────────────┘
//!                          │                       │ fetch_config
//!                          │        ┌──────────────▼───────────────────────┐
//!   interval / SIGHUP /    │        │ rcm: RegistryBuilder → Registry      │
//!   file change / admin ───┴──────▶ │      Configurator (ArcSwap snapshot) │
//!                 (Refresher)       └──────────────┬───────────────────────┘
//!                                                  │ all_relays / relays_for_validator
//!                                   ┌──────────────▼───────────────────────┐
//!                                   │ admin API, routing consumers         │
//!                                   └──────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use relay_router::admin::{self, AdminState};
use relay_router::cli::Cli;
use relay_router::config::loader::load_config;
use relay_router::config::watcher::ConfigWatcher;
use relay_router::config::RouterConfig;
use relay_router::lifecycle::startup::build_configurator;
use relay_router::lifecycle::{signals, Refresher, Shutdown};
use relay_router::observability::{logging, metrics};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref(), |config| cli.apply(config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("relay-router: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!("relay-router v{} starting", env!("CARGO_PKG_VERSION"));

    match run(config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "relay-router failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: RouterConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let (configurator, _statics) = build_configurator(&config)?;

    let shutdown = Shutdown::new();
    let (sync_tx, sync_rx) = mpsc::unbounded_channel();

    // Held for the lifetime of the daemon; dropping it stops watching.
    let _watcher = match (&config.provider.proposer_config_file, config.provider.watch) {
        (Some(path), true) => Some(ConfigWatcher::with_sender(path, sync_tx.clone()).run()?),
        _ => None,
    };

    tokio::spawn({
        let shutdown = shutdown.clone();
        let sync_tx = sync_tx.clone();
        async move {
            if let Err(e) = signals::listen(shutdown, sync_tx).await {
                tracing::error!(error = %e, "Failed to install signal handlers");
            }
        }
    });

    let refresher = Refresher::new(configurator.clone(), &config.sync);
    let refresher_task = tokio::spawn(refresher.run(sync_rx, shutdown.subscribe()));

    if config.admin.enabled {
        let listener = TcpListener::bind(&config.admin.bind_address).await?;
        let state = AdminState::new(configurator, config.admin.api_key.clone());
        admin::serve(listener, state, shutdown.clone()).await?;
    } else {
        shutdown.wait().await;
    }

    refresher_task.await?;
    Ok(())
}
