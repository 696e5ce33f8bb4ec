//! Router for the liveness check

use std::sync::{Arc, RwLock};

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Create the health router
pub fn router() -> Router<SharedState> {
    Router::new().route("/health", get(health))
}
