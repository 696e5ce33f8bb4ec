//! Client for the watsonx.ai chat API and the IBM Cloud IAM token
//! service it authenticates against.

mod chat;
mod token;

pub use chat::{ChatCompletion, ChatTurn, CompletionError, Role, TokenUsage, chat_completion};
pub use token::exchange_api_key;
