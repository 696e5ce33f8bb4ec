//! agentdesk packages the server and client core of a chat assistant
//! demo: an HTTP proxy that exchanges a user-supplied IBM Cloud API key
//! for a short-lived bearer token and relays chat completions to
//! watsonx.ai, plus the client-side session logic (agent catalog, daily
//! usage quota, chat state machine, demo mode) behind injectable
//! storage and transport seams.
//!
//! The per-agent daily quota is bookkeeping on the client only; the
//! proxy does not re-check it. It is a demo convenience, not a security
//! boundary.

pub mod api;
pub mod cli;
pub mod core;
pub mod session;
pub mod watsonx;
