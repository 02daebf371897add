//! Error taxonomy shared by every backend port.

use std::time::Duration;

use thiserror::Error;

/// Errors returned by backend adapters.
///
/// Transport failures are translated into one of these variants at the
/// adapter boundary; nothing above the adapter sees a raw HTTP error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Missing, invalid or expired credential (HTTP 401 or 403).
    #[error("authentication failed (status {status})")]
    Unauthorized {
        /// Status code returned by the backend.
        status: u16,
    },

    /// The requested resource does not exist.
    #[error("{resource} not found")]
    NotFound {
        /// What was being looked up, e.g. "product".
        resource: String,
    },

    /// The backend refused the request (other 4xx, or `success: false`).
    #[error("request rejected ({status}): {message}")]
    Rejected {
        /// Status code returned by the backend.
        status: u16,
        /// Message from the response body, if any.
        message: String,
    },

    /// The backend failed while handling the request (5xx).
    #[error("server error {status}: {message}")]
    Server {
        /// Status code returned by the backend.
        status: u16,
        /// Message from the response body, if any.
        message: String,
    },

    /// No response was received.
    #[error("network error: {0}")]
    Network(String),

    /// No response within the allotted time.
    #[error("request timed out after {timeout:?}")]
    Timeout {
        /// Timeout that elapsed.
        timeout: Duration,
    },

    /// The response body did not match the canonical envelope.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Creates a timeout error.
    pub fn timeout(timeout: Duration) -> Self {
        Self::Timeout { timeout }
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(status: u16) -> Self {
        Self::Unauthorized { status }
    }

    /// Creates a not found error.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates a rejected error.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Creates a server error.
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Maps a non-success HTTP status and its body message to an error.
    pub fn from_status(status: u16, message: impl Into<String>, resource: &str) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::unauthorized(status),
            404 => Self::not_found(resource),
            500..=599 => Self::server(status, message),
            _ => Self::rejected(status, message),
        }
    }

    /// Returns true if the session should be refreshed or cleared.
    pub fn is_authentication(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Returns true if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::Timeout { .. } | ApiError::Server { .. }
        )
    }

    /// Message suitable for showing next to a retry affordance.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized { .. } => "Your session has expired. Please log in again.".to_string(),
            ApiError::NotFound { resource } => {
                let mut chars = resource.chars();
                match chars.next() {
                    Some(first) => format!("{}{} not found", first.to_uppercase(), chars.as_str()),
                    None => "Not found".to_string(),
                }
            }
            ApiError::Rejected { message, .. } if !message.trim().is_empty() => message.clone(),
            ApiError::Rejected { .. } => "The request was rejected.".to_string(),
            ApiError::Server { .. } => "Something went wrong on our side. Please try again.".to_string(),
            ApiError::Network(_) => "Unable to reach the server. Check your connection and try again.".to_string(),
            ApiError::Timeout { .. } => "The request timed out. Please try again.".to_string(),
            ApiError::Parse(_) => "Received an unexpected response from the server.".to_string(),
        }
    }
}
