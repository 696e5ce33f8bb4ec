//! API routes module

pub mod agents;
pub mod auth;
pub mod chat;
mod health;
pub mod validate;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Session gate login
        .nest("/auth", auth::router())
        // API key validation
        .merge(validate::router())
        // Chat completion proxy
        .merge(chat::router())
        // Agent catalog for the UI selector
        .merge(agents::router())
        // Liveness check
        .merge(health::router())
}
