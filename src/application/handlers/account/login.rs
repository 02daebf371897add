//! LoginHandler - exchanges credentials for a session.

use std::sync::Arc;

use crate::application::ClientError;
use crate::domain::account::LoginCredentials;
use crate::domain::session::{SessionStore, TokenPair};
use crate::ports::{ApiError, AuthApi};

/// Handler for the login screen.
pub struct LoginHandler {
    auth: Arc<dyn AuthApi>,
    session: Arc<SessionStore>,
}

impl LoginHandler {
    pub fn new(auth: Arc<dyn AuthApi>, session: Arc<SessionStore>) -> Self {
        Self { auth, session }
    }

    /// Validates, logs in and stores the issued pair.
    ///
    /// The session is only written when the backend returned a non-empty
    /// access token; anything else is `LoginFailed` and leaves it untouched.
    pub async fn handle(&self, credentials: &LoginCredentials) -> Result<(), ClientError> {
        credentials.validate()?;

        let issued = self.auth.login(credentials).await.map_err(|e| match e {
            ApiError::Unauthorized { .. } => {
                ClientError::LoginFailed("invalid email or password".to_string())
            }
            ApiError::Rejected { message, .. } => ClientError::LoginFailed(message),
            other => ClientError::Api(other),
        })?;

        let pair = TokenPair::from_issued(issued).ok_or_else(|| {
            tracing::warn!("Login response carried no access token");
            ClientError::LoginFailed("no access token received".to_string())
        })?;

        self.session.set_pair(pair);
        tracing::info!("User logged in");
        Ok(())
    }
}
