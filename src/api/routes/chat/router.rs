//! Router for the chat completion proxy

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::json;

use super::public::{ChatRequest, ChatResponse};
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::watsonx::{ChatTurn, CompletionError, Role, chat_completion, exchange_api_key};

type SharedState = Arc<RwLock<AppState>>;

/// Exchange the caller's API key for a bearer token and relay the chat
/// completion. The key is read from the request body only and never
/// logged or stored.
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Response, ApiError> {
    if payload.api_key.trim().is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing apiKey"})),
        )
            .into_response());
    }

    let (iam_api_url, watsonx_api_url, project_id, model_id, system_message) = {
        let shared_state = state.read().expect("Unable to read shared state");
        let config = &shared_state.config;
        (
            config.iam_api_url.clone(),
            config.watsonx_api_url.clone(),
            config.project_id.clone(),
            config.model_id.clone(),
            config.system_message.clone(),
        )
    };

    let token = exchange_api_key(&iam_api_url, &payload.api_key).await?;

    let system_prompt = payload.system_prompt.unwrap_or(system_message);
    let mut transcript = vec![ChatTurn::new(Role::System, &system_prompt)];
    transcript.extend(payload.messages);

    match chat_completion(&watsonx_api_url, &token, &model_id, &project_id, &transcript).await {
        Ok(completion) => {
            tracing::debug!("Relayed chat completion from {}", model_id);
            Ok(Json(ChatResponse {
                reply: completion.reply,
                usage: completion.usage,
            })
            .into_response())
        }
        Err(CompletionError::Upstream { status, message }) => {
            tracing::error!("Upstream completion failed with {}: {}", status, message);
            Ok((
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(json!({"error": message})),
            )
                .into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/chat", post(chat_handler))
}
