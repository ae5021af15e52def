//! Resource operations, including file upload and full-text search

use url::form_urlencoded;

use super::{ApiRequest, FileUpload, RequestBody, API_PREFIX};
use crate::types::{ResourceCreate, ResourceUpdate, ResourceUploadMeta};

pub fn list() -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/resources/"))
}

pub fn create(resource: &ResourceCreate) -> ApiRequest {
    ApiRequest::post(format!("{API_PREFIX}/resources/"), resource)
}

pub fn get(resource_id: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/resources/{resource_id}"))
}

pub fn update(resource_id: &str, update: &ResourceUpdate) -> ApiRequest {
    ApiRequest::put(format!("{API_PREFIX}/resources/{resource_id}"), update)
}

pub fn delete(resource_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("{API_PREFIX}/resources/{resource_id}"))
}

/// Upload a file as a new resource.
///
/// The file travels as the multipart body; the metadata rides in the query
/// string, tags joined with commas, exactly as the backend's upload route
/// reads them.
pub fn upload(file: FileUpload, meta: &ResourceUploadMeta) -> ApiRequest {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(title) = &meta.title {
        query.append_pair("title", title);
    }
    if let Some(description) = &meta.description {
        query.append_pair("description", description);
    }
    if let Some(course_id) = &meta.course_id {
        query.append_pair("course_id", course_id);
    }
    if let Some(topic_id) = &meta.topic_id {
        query.append_pair("topic_id", topic_id);
    }
    if let Some(assignment_id) = &meta.assignment_id {
        query.append_pair("assignment_id", assignment_id);
    }
    if !meta.tags.is_empty() {
        query.append_pair("tags", &meta.tags.join(","));
    }
    let query = query.finish();

    let path = if query.is_empty() {
        format!("{API_PREFIX}/resources/upload")
    } else {
        format!("{API_PREFIX}/resources/upload?{query}")
    };

    ApiRequest {
        method: reqwest::Method::POST,
        path,
        body: RequestBody::Multipart(file),
    }
}

/// Full-text search across the caller's resources.
pub fn search(query: &str) -> ApiRequest {
    let q = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .finish();
    ApiRequest::get(format!("{API_PREFIX}/resources/search/fulltext?{q}"))
}
