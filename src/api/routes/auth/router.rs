//! Router for the session gate login

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};

use super::public::{LoginRequest, LoginResponse};
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// Check the supplied credentials against the configured pair. No token
/// is issued; the client keeps its own session flag.
async fn login(
    State(state): State<SharedState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    let (username, password) = {
        let shared_state = state.read().expect("Unable to read shared state");
        (
            shared_state.config.login_username.clone(),
            shared_state.config.login_password.clone(),
        )
    };

    if payload.username == username && payload.password == password {
        (StatusCode::OK, Json(LoginResponse { success: true }))
    } else {
        (StatusCode::UNAUTHORIZED, Json(LoginResponse { success: false }))
    }
}

/// Create the auth router
pub fn router() -> Router<SharedState> {
    Router::new().route("/login", post(login))
}
