//! Course operations

use super::{ApiRequest, API_PREFIX};
use crate::types::{CourseCreate, CourseUpdate};

pub fn list() -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/courses/"))
}

pub fn create(course: &CourseCreate) -> ApiRequest {
    ApiRequest::post(format!("{API_PREFIX}/courses/"), course)
}

pub fn get(course_id: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/courses/{course_id}"))
}

pub fn update(course_id: &str, update: &CourseUpdate) -> ApiRequest {
    ApiRequest::put(format!("{API_PREFIX}/courses/{course_id}"), update)
}

pub fn delete(course_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("{API_PREFIX}/courses/{course_id}"))
}
