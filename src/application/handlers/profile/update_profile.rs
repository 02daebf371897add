//! UpdateProfileHandler - name edits and profile photo.

use std::sync::Arc;

use crate::application::{ClientError, SessionGuard};
use crate::domain::account::{ProfileUpdate, UserProfile};
use crate::domain::foundation::{ImageUpload, ValidationErrors};
use crate::ports::ProfileApi;

pub struct UpdateProfileHandler {
    api: Arc<dyn ProfileApi>,
    guard: Arc<SessionGuard>,
}

impl UpdateProfileHandler {
    pub fn new(api: Arc<dyn ProfileApi>, guard: Arc<SessionGuard>) -> Self {
        Self { api, guard }
    }

    pub async fn handle(&self, update: &ProfileUpdate) -> Result<UserProfile, ClientError> {
        update.validate()?;

        let api = &self.api;
        let profile = self
            .guard
            .call(|token| async move { api.update_profile(&token, update).await })
            .await?;
        tracing::info!("Profile updated");
        Ok(profile)
    }

    /// Uploads a new photo from the camera or gallery.
    pub async fn handle_image(&self, image: &ImageUpload) -> Result<UserProfile, ClientError> {
        image
            .validate("profileImage")
            .map_err(ValidationErrors::from)?;

        let api = &self.api;
        let profile = self
            .guard
            .call(|token| async move { api.update_profile_image(&token, image).await })
            .await?;
        tracing::info!("Profile image updated");
        Ok(profile)
    }
}
