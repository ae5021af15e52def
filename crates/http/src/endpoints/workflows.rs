//! Workflow operations, execution and execution history

use super::{ApiRequest, API_PREFIX};
use crate::types::{WorkflowCreate, WorkflowExecuteRequest, WorkflowUpdate};

pub fn list() -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/workflows/"))
}

pub fn create(workflow: &WorkflowCreate) -> ApiRequest {
    ApiRequest::post(format!("{API_PREFIX}/workflows/"), workflow)
}

pub fn get(workflow_id: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/workflows/{workflow_id}"))
}

pub fn update(workflow_id: &str, update: &WorkflowUpdate) -> ApiRequest {
    ApiRequest::put(format!("{API_PREFIX}/workflows/{workflow_id}"), update)
}

pub fn delete(workflow_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("{API_PREFIX}/workflows/{workflow_id}"))
}

/// Kick off a run with the given parameters.
pub fn execute(workflow_id: &str, request: &WorkflowExecuteRequest) -> ApiRequest {
    ApiRequest::post(format!("{API_PREFIX}/workflows/{workflow_id}/execute"), request)
}

/// Run history for one workflow.
pub fn executions(workflow_id: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/workflows/{workflow_id}/executions"))
}

/// A single run, looked up across workflows.
pub fn execution(execution_id: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/workflows/executions/{execution_id}"))
}
