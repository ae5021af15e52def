//! Client error types

use thiserror::Error;

/// Failures surfaced by [`CampusClient`](super::CampusClient).
///
/// A rejected credential gets its own variant because the client reacts to
/// it (session wipe plus redirect hook); every other non-success status is
/// passed through as [`ClientError::Api`] for the caller to handle.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, timeout or protocol error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Credential missing or rejected (HTTP 401)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Any other non-success status from the backend
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            Self::AuthenticationFailed(message)
        } else {
            Self::Api {
                status: status.as_u16(),
                message,
            }
        }
    }

    /// Whether this failure means the session's credential was rejected.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// Status code of an API failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::AuthenticationFailed(_) => Some(401),
            _ => None,
        }
    }
}
