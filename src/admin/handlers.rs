use std::time::UNIX_EPOCH;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::admin::AdminState;
use crate::observability::metrics;
use crate::relay::RelayEntry;

#[derive(Debug, Serialize, Deserialize)]
pub struct SystemStatus {
    pub version: String,
    pub generation: u64,
    /// Unix seconds of the installed snapshot.
    pub installed_at: u64,
    pub relays: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidatorRelays {
    pub public_key: String,
    pub relays: Vec<RelayEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SyncResult {
    pub synced: bool,
    pub generation: u64,
    pub error: Option<String>,
}

pub async fn get_status(State(state): State<AdminState>) -> Json<SystemStatus> {
    let snapshot = state.configurator.snapshot();
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        generation: snapshot.generation(),
        installed_at: snapshot
            .installed_at()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
        relays: snapshot.registry().all_relays().len(),
    })
}

pub async fn get_all_relays(State(state): State<AdminState>) -> Json<Vec<RelayEntry>> {
    Json(state.configurator.all_relays())
}

pub async fn get_validator_relays(
    State(state): State<AdminState>,
    Path(pubkey): Path<String>,
) -> Json<ValidatorRelays> {
    let relays = state.configurator.relays_for_validator(&pubkey);
    Json(ValidatorRelays {
        public_key: pubkey,
        relays,
    })
}

pub async fn post_sync(State(state): State<AdminState>) -> (StatusCode, Json<SyncResult>) {
    let configurator = state.configurator.clone();
    let outcome = tokio::task::spawn_blocking(move || configurator.sync()).await;
    let generation = state.configurator.snapshot().generation();

    let (status, error) = match outcome {
        Ok(Ok(())) => (StatusCode::OK, None),
        Ok(Err(e)) => (StatusCode::SERVICE_UNAVAILABLE, Some(format!("{e}: {}", e.cause()))),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Some(e.to_string())),
    };

    metrics::record_sync(error.is_none());
    if error.is_none() {
        metrics::record_snapshot(&state.configurator.snapshot());
    }

    (
        status,
        Json(SyncResult {
            synced: error.is_none(),
            generation,
            error,
        }),
    )
}
