use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

// Generation parameters are fixed for the demo rather than
// caller-supplied.
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.9;

const API_VERSION: &str = "2024-05-31";

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The first completion's text plus the token accounting reported by
/// the upstream.
#[derive(Debug)]
pub struct ChatCompletion {
    pub reply: String,
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Error)]
pub enum CompletionError {
    /// The upstream replied with a non-success status. The status and
    /// message are relayed to the caller.
    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream response missing completion text")]
    MalformedResponse,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChatApiResponse {
    choices: Vec<Choice>,
    usage: Option<TokenUsage>,
}

fn error_message(body: &Value) -> Option<String> {
    if let Some(message) = body.get("error").and_then(Value::as_str) {
        return Some(message.to_string());
    }
    body.get("errors")?
        .get(0)?
        .get("message")?
        .as_str()
        .map(String::from)
}

/// Request a single chat completion from watsonx.ai and extract the
/// first choice's text. No retry; one attempt per call.
pub async fn chat_completion(
    api_url: &str,
    bearer_token: &str,
    model_id: &str,
    project_id: &str,
    messages: &[ChatTurn],
) -> Result<ChatCompletion, CompletionError> {
    let payload = json!({
        "model_id": model_id,
        "project_id": project_id,
        "messages": messages,
        "max_tokens": MAX_TOKENS,
        "temperature": TEMPERATURE,
        "top_p": TOP_P,
    });
    let url = format!(
        "{}/ml/v1/text/chat?version={}",
        api_url.trim_end_matches("/"),
        API_VERSION
    );
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(bearer_token)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 2))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| error_message(&body))
            .unwrap_or_else(|| "Upstream request failed".to_string());
        return Err(CompletionError::Upstream {
            status: status.as_u16(),
            message,
        });
    }

    let body: ChatApiResponse = response.json().await?;
    let reply = body
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(CompletionError::MalformedResponse)?;

    Ok(ChatCompletion {
        reply,
        usage: body.usage,
    })
}
