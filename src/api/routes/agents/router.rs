//! Router for the agent catalog

use std::sync::{Arc, RwLock};

use axum::{Json, Router, routing::get};

use super::public::{AgentSummary, AgentsResponse};
use crate::api::state::AppState;
use crate::session::builtin_agents;

type SharedState = Arc<RwLock<AppState>>;

/// List the built-in agents for the UI selector
async fn agent_list() -> Json<AgentsResponse> {
    let agents = builtin_agents()
        .into_iter()
        .map(|agent| AgentSummary {
            id: agent.id,
            name: agent.name,
            description: agent.description,
        })
        .collect();

    Json(AgentsResponse { agents })
}

/// Create the agents router
pub fn router() -> Router<SharedState> {
    Router::new().route("/agents", get(agent_list))
}
