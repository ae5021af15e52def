//! Request descriptors for the Campus API
//!
//! Builder functions return a description of method, path and payload
//! instead of performing the call, so the whole catalog can be checked
//! without a live network. [`CampusClient`](crate::client::CampusClient)
//! turns a descriptor into an HTTP request.

pub mod agents;
pub mod assignments;
pub mod auth;
pub mod courses;
pub mod plugins;
pub mod resources;
pub mod workflows;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Versioned prefix every backend route lives under.
pub const API_PREFIX: &str = "/api/v1";

/// File payload for multipart endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Payload carried by a request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    None,
    /// JSON document, sent as `application/json`.
    Json(Value),
    /// Field pairs, sent as `application/x-www-form-urlencoded`.
    Form(Vec<(&'static str, String)>),
    /// Single-file multipart upload under the `file` field.
    Multipart(FileUpload),
}

/// Description of one backend operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
}

impl ApiRequest {
    fn get(path: String) -> Self {
        Self {
            method: Method::GET,
            path,
            body: RequestBody::None,
        }
    }

    fn delete(path: String) -> Self {
        Self {
            method: Method::DELETE,
            path,
            body: RequestBody::None,
        }
    }

    fn post(path: String, payload: &impl Serialize) -> Self {
        Self {
            method: Method::POST,
            path,
            body: json_body(payload),
        }
    }

    fn post_empty(path: String) -> Self {
        Self {
            method: Method::POST,
            path,
            body: RequestBody::None,
        }
    }

    fn put(path: String, payload: &impl Serialize) -> Self {
        Self {
            method: Method::PUT,
            path,
            body: json_body(payload),
        }
    }
}

// Serializing these derive-generated payloads cannot fail; fall back to
// `null` rather than panic if it ever does.
fn json_body(payload: &impl Serialize) -> RequestBody {
    RequestBody::Json(serde_json::to_value(payload).unwrap_or(Value::Null))
}
