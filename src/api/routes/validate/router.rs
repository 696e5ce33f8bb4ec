//! Router for API key validation

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State, routing::post};

use super::public::{ValidateRequest, ValidateResponse};
use crate::api::state::AppState;
use crate::watsonx::exchange_api_key;

type SharedState = Arc<RwLock<AppState>>;

/// Check whether the supplied API key can be exchanged for a token.
/// Every failure, a rejected key or a network error alike, normalizes
/// to an invalid result; the detail is only logged.
async fn validate(
    State(state): State<SharedState>,
    Json(payload): Json<ValidateRequest>,
) -> Json<ValidateResponse> {
    let iam_api_url = {
        let shared_state = state.read().expect("Unable to read shared state");
        shared_state.config.iam_api_url.clone()
    };

    let valid = match exchange_api_key(&iam_api_url, &payload.api_key).await {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!("API key validation failed: {}", err);
            false
        }
    };

    Json(ValidateResponse { valid })
}

/// Create the validate router
pub fn router() -> Router<SharedState> {
    Router::new().route("/validate", post(validate))
}
