//! ChangePasswordHandler.

use std::sync::Arc;

use crate::application::{ClientError, SessionGuard};
use crate::domain::account::PasswordChange;
use crate::ports::ProfileApi;

pub struct ChangePasswordHandler {
    api: Arc<dyn ProfileApi>,
    guard: Arc<SessionGuard>,
}

impl ChangePasswordHandler {
    pub fn new(api: Arc<dyn ProfileApi>, guard: Arc<SessionGuard>) -> Self {
        Self { api, guard }
    }

    /// Returns the backend's confirmation message.
    pub async fn handle(&self, change: &PasswordChange) -> Result<String, ClientError> {
        change.validate()?;

        let api = &self.api;
        self.guard
            .call(|token| async move { api.change_password(&token, change).await })
            .await
    }
}
