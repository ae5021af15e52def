//! Assignment operations

use super::{ApiRequest, API_PREFIX};
use crate::types::{AssignmentCreate, AssignmentUpdate};

pub fn list() -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/assignments/"))
}

pub fn create(assignment: &AssignmentCreate) -> ApiRequest {
    ApiRequest::post(format!("{API_PREFIX}/assignments/"), assignment)
}

pub fn get(assignment_id: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/assignments/{assignment_id}"))
}

pub fn update(assignment_id: &str, update: &AssignmentUpdate) -> ApiRequest {
    ApiRequest::put(format!("{API_PREFIX}/assignments/{assignment_id}"), update)
}

pub fn delete(assignment_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("{API_PREFIX}/assignments/{assignment_id}"))
}
