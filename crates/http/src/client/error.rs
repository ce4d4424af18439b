//! Client error types

use crate::types::ErrorBody;
use thiserror::Error;

fn or_status(message: Option<&String>) -> &str {
    message.map_or("no message", String::as_str)
}

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {}", or_status(.message.as_ref()))]
    ServerError {
        status: u16,
        message: Option<String>,
    },

    /// Authentication failed (401)
    #[error("Authentication failed: {}", or_status(.0.as_ref()))]
    AuthenticationFailed(Option<String>),

    /// Resource not found
    #[error("Resource not found: {}", or_status(.0.as_ref()))]
    NotFound(Option<String>),

    /// Bad request
    #[error("Bad request: {}", or_status(.0.as_ref()))]
    BadRequest(Option<String>),

    /// Forbidden
    #[error("Forbidden: {}", or_status(.0.as_ref()))]
    Forbidden(Option<String>),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code and the raw response body
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message);

        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            status => Self::ServerError { status, message },
        }
    }

    /// Whether the server rejected the credential attached to the request
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// Whether the request never produced an HTTP response
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Request(_))
    }

    /// HTTP status of the response, when there was one
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message supplied by the server in the error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::BadRequest(message)
            | Self::AuthenticationFailed(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::ServerError { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
