//! Capture relay routes — observed requests in, credential status out.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use commentdeck_capture::{CaptureStats, ObservedRequest};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/capture/observed-request", post(observed_request))
        .route("/capture/stats", get(capture_stats))
        .route("/credentials/status", get(credentials_status))
}

/// Ingest one observed request from the companion extension. Always answers
/// success — capture must never fail the extension's relay.
async fn observed_request(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ObservedRequest>,
) -> Json<Value> {
    let matched = state.capture.observe(&request);
    Json(json!({ "success": true, "matched": matched }))
}

async fn capture_stats(State(state): State<Arc<AppState>>) -> Json<CaptureStats> {
    Json(state.capture.stats())
}

/// Presence booleans only; stored values are never echoed back.
async fn credentials_status(State(state): State<Arc<AppState>>) -> Json<Value> {
    let set = state.store.snapshot();
    Json(json!({
        "hasToken": set.has_token(),
        "hasViewerId": set.viewer_id.is_some(),
        "hasPin": set.x_pin.is_some(),
    }))
}
