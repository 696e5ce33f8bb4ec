//! Public types for the agent catalog API
use serde::Serialize;

/// Display fields for the UI selector. Instruction text stays out of
/// the listing.
#[derive(Serialize)]
pub struct AgentSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct AgentsResponse {
    pub agents: Vec<AgentSummary>,
}
