//! Workflow endpoints

use serde_json::Value;

use super::{error::ClientError, CampusClient};
use crate::endpoints;
use crate::types::{
    WorkflowCreate, WorkflowExecuteRequest, WorkflowExecutionResponse, WorkflowResponse,
    WorkflowUpdate,
};

impl CampusClient {
    pub async fn list_workflows(&self) -> Result<Vec<WorkflowResponse>, ClientError> {
        self.send(endpoints::workflows::list()).await
    }

    pub async fn create_workflow(
        &self,
        workflow: &WorkflowCreate,
    ) -> Result<WorkflowResponse, ClientError> {
        self.send(endpoints::workflows::create(workflow)).await
    }

    pub async fn get_workflow(&self, workflow_id: &str) -> Result<WorkflowResponse, ClientError> {
        self.send(endpoints::workflows::get(workflow_id)).await
    }

    pub async fn update_workflow(
        &self,
        workflow_id: &str,
        update: &WorkflowUpdate,
    ) -> Result<WorkflowResponse, ClientError> {
        self.send(endpoints::workflows::update(workflow_id, update))
            .await
    }

    pub async fn delete_workflow(&self, workflow_id: &str) -> Result<Value, ClientError> {
        self.send(endpoints::workflows::delete(workflow_id)).await
    }

    /// Kick off a run with the given parameters.
    pub async fn execute_workflow(
        &self,
        workflow_id: &str,
        request: &WorkflowExecuteRequest,
    ) -> Result<Value, ClientError> {
        self.send(endpoints::workflows::execute(workflow_id, request))
            .await
    }

    /// Run history for one workflow.
    pub async fn list_workflow_executions(
        &self,
        workflow_id: &str,
    ) -> Result<Vec<WorkflowExecutionResponse>, ClientError> {
        self.send(endpoints::workflows::executions(workflow_id)).await
    }

    /// A single run, looked up across workflows.
    pub async fn get_workflow_execution(
        &self,
        execution_id: &str,
    ) -> Result<WorkflowExecutionResponse, ClientError> {
        self.send(endpoints::workflows::execution(execution_id)).await
    }
}
