//! Wire types for the Campus backend API
//!
//! Shapes mirror the backend's response models; backend-generated fields
//! (ids, timestamps) come back as strings.

use campus_core::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token pair plus identity returned by login and registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: User,
}

/// Account creation payload. Registration signs the account in immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseCreate {
    pub name: String,
    pub code: Option<String>,
    pub semester: Option<String>,
    pub year: Option<i32>,
    pub instructor: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseUpdate {
    pub name: Option<String>,
    pub code: Option<String>,
    pub semester: Option<String>,
    pub year: Option<i32>,
    pub instructor: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseResponse {
    pub id: String,
    pub name: String,
    pub code: Option<String>,
    pub semester: Option<String>,
    pub year: Option<i32>,
    pub instructor: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentCreate {
    pub course_id: String,
    pub topic_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub points_possible: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub points_possible: Option<f64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentResponse {
    pub id: String,
    pub course_id: String,
    pub topic_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub points_possible: Option<f64>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCreate {
    pub title: String,
    pub description: Option<String>,
    /// One of `file`, `link`, `repo`, `note`.
    pub resource_type: String,
    pub url: Option<String>,
    pub content: Option<String>,
    pub course_id: Option<String>,
    pub topic_id: Option<String>,
    pub assignment_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub resource_type: String,
    pub url: Option<String>,
    pub file_path: Option<String>,
    pub content: Option<String>,
    pub course_id: Option<String>,
    pub topic_id: Option<String>,
    pub assignment_id: Option<String>,
    pub tags: Vec<String>,
    pub ai_summary: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub last_accessed: String,
}

/// Metadata accompanying a file upload. Everything is optional; the backend
/// falls back to the file name for the title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceUploadMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub course_id: Option<String>,
    pub topic_id: Option<String>,
    pub assignment_id: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowCreate {
    pub name: String,
    pub description: Option<String>,
    pub definition: Value,
    pub schedule_cron: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub definition: Option<Value>,
    pub is_active: Option<bool>,
    pub schedule_cron: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub definition: Value,
    pub is_active: bool,
    pub schedule_cron: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Parameters handed to a workflow run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowExecuteRequest {
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowExecutionResponse {
    pub id: String,
    pub workflow_id: String,
    pub status: String,
    pub started_at: String,
    pub completed_at: Option<String>,
    pub error_message: Option<String>,
    pub result: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInstallRequest {
    pub manifest: Value,
    pub config: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginConfigUpdate {
    pub config: Value,
    pub credentials: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginExecuteRequest {
    pub action: String,
    pub params: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginResponse {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub category: String,
    pub capabilities: Vec<String>,
    pub is_active: bool,
    pub config: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInteractRequest {
    pub capability: String,
    pub input_data: Value,
    pub context: Option<Value>,
}

/// One entry of a batched interaction. The backend caps batches at ten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchInteraction {
    pub agent_name: String,
    pub capability: String,
    pub input_data: Value,
    pub context: Option<Value>,
}

/// Result of one agent call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReply {
    pub agent_name: String,
    pub capability: String,
    pub success: bool,
    pub output_data: Value,
    pub error_message: Option<String>,
    pub tokens_used: Option<i64>,
    pub cost: Option<f64>,
    pub duration_ms: i64,
}

/// Batched results; per-entry failures come back inline rather than failing
/// the whole batch, so entries stay untyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchInteractResponse {
    pub results: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCapability {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
    pub output_schema: Value,
    pub cost_per_request: Option<f64>,
    pub max_tokens: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: String,
    pub capabilities: Vec<AgentCapability>,
    pub is_healthy: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentHealth {
    pub agent_name: String,
    pub is_healthy: bool,
}
