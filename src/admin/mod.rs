//! Admin API.
//!
//! # Data Flow
//! ```text
//! GET  /status          → installed snapshot metadata
//! GET  /relays          → Configurator::all_relays
//! GET  /relays/{pubkey} → Configurator::relays_for_validator
//! POST /sync            → Configurator::sync (blocking pool)
//! ```
//!
//! # Design Decisions
//! - Reads never reach the provider; only POST /sync does
//! - Optional bearer token guards every route

pub mod auth;
pub mod handlers;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::lifecycle::Shutdown;
use crate::rcm::Configurator;
use self::auth::admin_auth_middleware;
use self::handlers::*;

/// State shared by admin handlers.
#[derive(Clone)]
pub struct AdminState {
    pub configurator: Arc<Configurator>,
    pub api_key: Option<Arc<str>>,
}

impl AdminState {
    pub fn new(configurator: Arc<Configurator>, api_key: Option<String>) -> Self {
        Self {
            configurator,
            api_key: api_key.map(Arc::from),
        }
    }
}

pub fn setup_admin_router(state: AdminState) -> Router {
    Router::new()
        .route("/status", get(get_status))
        .route("/relays", get(get_all_relays))
        .route("/relays/{pubkey}", get(get_validator_relays))
        .route("/sync", post(post_sync))
        .layer(middleware::from_fn_with_state(state.clone(), admin_auth_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the admin API until shutdown is triggered.
pub async fn serve(listener: TcpListener, state: AdminState, shutdown: Shutdown) -> std::io::Result<()> {
    tracing::info!(address = %listener.local_addr()?, "Admin API listening");

    axum::serve(listener, setup_admin_router(state))
        .with_graceful_shutdown(shutdown.wait())
        .await?;

    tracing::info!("Admin API stopped");
    Ok(())
}
