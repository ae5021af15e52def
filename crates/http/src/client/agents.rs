//! AI agent endpoints

use super::{error::ClientError, CampusClient};
use crate::endpoints;
use crate::types::{
    AgentCapability, AgentHealth, AgentInfo, AgentInteractRequest, AgentReply, BatchInteractResponse,
    BatchInteraction,
};

impl CampusClient {
    pub async fn list_agents(&self) -> Result<Vec<AgentInfo>, ClientError> {
        self.send(endpoints::agents::list()).await
    }

    pub async fn get_agent(&self, agent_name: &str) -> Result<AgentInfo, ClientError> {
        self.send(endpoints::agents::get(agent_name)).await
    }

    /// Single interaction with one agent capability.
    pub async fn interact_with_agent(
        &self,
        agent_name: &str,
        request: &AgentInteractRequest,
    ) -> Result<AgentReply, ClientError> {
        self.send(endpoints::agents::interact(agent_name, request))
            .await
    }

    pub async fn list_agent_capabilities(
        &self,
        agent_name: &str,
    ) -> Result<Vec<AgentCapability>, ClientError> {
        self.send(endpoints::agents::capabilities(agent_name)).await
    }

    /// Batched interactions, capped at ten entries by the backend.
    pub async fn batch_interact(
        &self,
        requests: &[BatchInteraction],
    ) -> Result<BatchInteractResponse, ClientError> {
        self.send(endpoints::agents::batch_interact(requests)).await
    }

    pub async fn agent_health(&self, agent_name: &str) -> Result<AgentHealth, ClientError> {
        self.send(endpoints::agents::health(agent_name)).await
    }
}
