//! GetProfileHandler.

use std::sync::Arc;

use crate::application::{ClientError, SessionGuard};
use crate::domain::account::UserProfile;
use crate::ports::ProfileApi;

pub struct GetProfileHandler {
    api: Arc<dyn ProfileApi>,
    guard: Arc<SessionGuard>,
}

impl GetProfileHandler {
    pub fn new(api: Arc<dyn ProfileApi>, guard: Arc<SessionGuard>) -> Self {
        Self { api, guard }
    }

    pub async fn handle(&self) -> Result<UserProfile, ClientError> {
        let api = &self.api;
        self.guard
            .call(|token| async move { api.get_profile(&token).await })
            .await
    }
}
