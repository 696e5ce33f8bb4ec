use std::time::Duration;

use anyhow::{Result, bail};
use async_trait::async_trait;
use thiserror::Error;

use super::agents::{AgentDefinition, builtin_agents};
use super::storage::{API_KEY_KEY, KeyValueStorage, SESSION_KEY};
use super::usage;
use crate::api::public::chat::ChatResponse;
use crate::watsonx::{ChatTurn, Role, TokenUsage};

/// How much of the transcript is sent with each submission.
const HISTORY_WINDOW: usize = 10;

/// Simulated latency before a demo-mode reply appears.
const DEMO_LATENCY: Duration = Duration::from_millis(600);

/// Per-agent conversation states. A submission is only accepted while
/// the input is unlocked (`Greeting` or `AwaitingInput`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionState {
    Greeting,
    AwaitingInput,
    Sending,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown agent: {0}")]
    UnknownAgent(String),
    #[error("No agent is selected")]
    NoActiveAgent,
    #[error("Daily limit reached for {0}")]
    QuotaExceeded(String),
    #[error("A message is already in flight")]
    Busy,
    #[error("{0}")]
    SendFailed(String),
}

/// A completed exchange as seen by the client.
#[derive(Debug)]
pub struct ChatReply {
    pub content: String,
    pub usage: Option<TokenUsage>,
}

/// The network step behind a submission, kept behind a trait so tests
/// can simulate latency and failure without a server.
#[async_trait]
pub trait ChatTransport {
    async fn send(
        &self,
        api_key: &str,
        system_prompt: &str,
        messages: &[ChatTurn],
    ) -> Result<ChatReply>;
}

/// Transport that posts to the proxy's `/chat` endpoint.
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches("/").to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(
        &self,
        api_key: &str,
        system_prompt: &str,
        messages: &[ChatTurn],
    ) -> Result<ChatReply> {
        let payload = serde_json::json!({
            "apiKey": api_key,
            "systemPrompt": system_prompt,
            "messages": messages,
        });
        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = body
                .get("error")
                .and_then(|e| e.as_str())
                .unwrap_or("Something went wrong");
            bail!(message.to_string());
        }

        let body: ChatResponse = response.json().await?;
        Ok(ChatReply {
            content: body.reply,
            usage: body.usage,
        })
    }
}

/// Configuration handed to the session at construction.
pub struct SessionConfig {
    pub agents: Vec<AgentDefinition>,
    pub daily_limit: u32,
    pub demo_latency: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            agents: builtin_agents(),
            daily_limit: usage::DAILY_LIMIT,
            demo_latency: DEMO_LATENCY,
        }
    }
}

/// One user's chat session: the active agent, the visible transcript,
/// and the login/API-key/usage bookkeeping in the injected storage.
pub struct ChatSession<S: KeyValueStorage, T: ChatTransport> {
    config: SessionConfig,
    storage: S,
    transport: T,
    active: Option<usize>,
    transcript: Vec<ChatTurn>,
    state: SessionState,
    last_error: Option<String>,
}

impl<S, T> ChatSession<S, T>
where
    S: KeyValueStorage,
    T: ChatTransport,
{
    pub fn new(config: SessionConfig, storage: S, transport: T) -> Self {
        Self {
            config,
            storage,
            transport,
            active: None,
            transcript: Vec::new(),
            state: SessionState::Greeting,
            last_error: None,
        }
    }

    pub fn log_in(&mut self) {
        self.storage.set(SESSION_KEY, "1");
    }

    pub fn log_out(&mut self) {
        self.storage.remove(SESSION_KEY);
    }

    pub fn is_logged_in(&self) -> bool {
        self.storage.get(SESSION_KEY).is_some()
    }

    pub fn set_api_key(&mut self, api_key: &str) {
        self.storage.set(API_KEY_KEY, api_key);
    }

    pub fn clear_api_key(&mut self) {
        self.storage.remove(API_KEY_KEY);
    }

    /// Without a stored API key the session runs in demo mode.
    pub fn api_key(&self) -> Option<String> {
        self.storage.get(API_KEY_KEY)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn active_agent(&self) -> Option<&AgentDefinition> {
        self.active.map(|index| &self.config.agents[index])
    }

    pub fn usage(&self) -> usage::UsageRecord {
        usage::get_usage(&self.storage)
    }

    pub fn remaining(&self, agent_id: &str) -> u32 {
        usage::remaining(&self.storage, agent_id, self.config.daily_limit)
    }

    /// Activate an agent. Refused when the agent's daily quota is
    /// spent, leaving the previously active agent selected. Switching
    /// discards the transcript and starts over with a greeting for the
    /// new agent.
    pub fn select_agent(&mut self, agent_id: &str) -> Result<(), SessionError> {
        let index = self
            .config
            .agents
            .iter()
            .position(|agent| agent.id == agent_id)
            .ok_or_else(|| SessionError::UnknownAgent(agent_id.to_string()))?;

        if self.remaining(agent_id) == 0 {
            return Err(SessionError::QuotaExceeded(
                self.config.agents[index].name.clone(),
            ));
        }

        let agent = &self.config.agents[index];
        self.transcript = vec![ChatTurn::new(
            Role::Assistant,
            &format!(
                "Hi! I'm {}. {} How can I help today?",
                agent.name, agent.description
            ),
        )];
        self.active = Some(index);
        self.state = SessionState::Greeting;
        self.last_error = None;
        Ok(())
    }

    /// Submit one user message and wait for the reply. With no stored
    /// API key the reply is fabricated locally after a fixed simulated
    /// delay; otherwise the transport carries the exchange. Either way
    /// the user's turn stays in the transcript and the agent's daily
    /// counter moves once per submission.
    pub async fn submit(&mut self, input: &str) -> Result<&ChatTurn, SessionError> {
        if self.state == SessionState::Sending {
            return Err(SessionError::Busy);
        }
        let Some(index) = self.active else {
            return Err(SessionError::NoActiveAgent);
        };

        self.state = SessionState::Sending;
        self.last_error = None;
        self.transcript.push(ChatTurn::new(Role::User, input));
        usage::increment_usage(&mut self.storage, &self.config.agents[index].id);

        let agent = &self.config.agents[index];
        let result = match self.storage.get(API_KEY_KEY) {
            None => {
                tokio::time::sleep(self.config.demo_latency).await;
                Ok(ChatReply {
                    content: agent.demo_reply(input),
                    usage: None,
                })
            }
            Some(api_key) => {
                let window_start = self.transcript.len().saturating_sub(HISTORY_WINDOW);
                self.transport
                    .send(
                        &api_key,
                        &agent.instructions,
                        &self.transcript[window_start..],
                    )
                    .await
            }
        };

        self.state = SessionState::AwaitingInput;
        match result {
            Ok(reply) => {
                self.transcript
                    .push(ChatTurn::new(Role::Assistant, &reply.content));
                Ok(self
                    .transcript
                    .last()
                    .expect("Transcript cannot be empty after a push"))
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Err(SessionError::SendFailed(err.to_string()))
            }
        }
    }
}
