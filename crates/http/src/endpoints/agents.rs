//! AI agent operations

use super::{ApiRequest, API_PREFIX};
use crate::types::{AgentInteractRequest, BatchInteraction};

pub fn list() -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/agents/"))
}

pub fn get(agent_name: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/agents/{agent_name}"))
}

/// Single interaction with one agent capability.
pub fn interact(agent_name: &str, request: &AgentInteractRequest) -> ApiRequest {
    ApiRequest::post(format!("{API_PREFIX}/agents/{agent_name}/interact"), request)
}

pub fn capabilities(agent_name: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/agents/{agent_name}/capabilities"))
}

/// Batched interactions; the body is a bare JSON array and the backend caps
/// it at ten entries.
pub fn batch_interact(requests: &[BatchInteraction]) -> ApiRequest {
    ApiRequest::post(format!("{API_PREFIX}/agents/batch-interact"), &requests)
}

pub fn health(agent_name: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/agents/{agent_name}/health"))
}
