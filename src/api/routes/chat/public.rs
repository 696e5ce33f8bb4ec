//! Public types for the chat proxy API
use serde::{Deserialize, Serialize};

use crate::watsonx::{ChatTurn, TokenUsage};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub api_key: String,
    pub system_prompt: Option<String>,
    pub messages: Vec<ChatTurn>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}
