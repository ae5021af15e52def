//! Campus HTTP client
//!
//! Typed access to the Campus backend API: request descriptors grouped by
//! resource domain, and a client that attaches the session's bearer token on
//! dispatch and invalidates the session when the backend rejects it.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::error::ClientError;
pub use client::{CampusClient, CampusClientBuilder};
pub use endpoints::{ApiRequest, FileUpload, RequestBody, API_PREFIX};
