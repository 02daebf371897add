//! Errors surfaced to the presentation layer.

use thiserror::Error;

use crate::domain::foundation::ValidationErrors;
use crate::ports::ApiError;

/// Errors returned by application handlers and controllers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Form input was rejected before anything was sent.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// An authenticated operation was attempted without a session.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Login returned no usable access token.
    #[error("login failed: {0}")]
    LoginFailed(String),
}

impl ClientError {
    /// Field errors to render inline, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ClientError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// True when the UI should route back to the entry screen.
    pub fn is_authentication(&self) -> bool {
        match self {
            ClientError::Api(e) => e.is_authentication(),
            ClientError::NotAuthenticated => true,
            _ => false,
        }
    }

    /// True when a retry affordance makes sense.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Api(e) if e.is_retryable())
    }

    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(errors) => errors
                .errors()
                .first()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "Please check the form and try again.".to_string()),
            ClientError::Api(e) => e.user_message(),
            ClientError::NotAuthenticated => "Please log in to continue.".to_string(),
            ClientError::LoginFailed(reason) => format!("Login failed: {}", reason),
        }
    }
}
