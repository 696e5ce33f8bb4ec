//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use agentdesk::api::AppState;
use agentdesk::api::app;
use agentdesk::core::AppConfig;

/// Creates a test application router with the upstream URLs pointed at
/// the given mock servers. Tests that never reach an upstream can pass
/// an unroutable URL.
pub fn test_app(iam_api_url: &str, watsonx_api_url: &str) -> Router {
    let app_config = AppConfig {
        login_username: String::from("demo"),
        login_password: String::from("let-me-in"),
        iam_api_url: iam_api_url.to_string(),
        watsonx_api_url: watsonx_api_url.to_string(),
        project_id: String::from("test-project"),
        model_id: String::from("ibm/granite-3-8b-instruct"),
        system_message: String::from("You are a helpful assistant."),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not utf-8")
}
