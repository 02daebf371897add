//! `ProfileApi` over HTTP.

use async_trait::async_trait;
use reqwest::multipart::Form;
use secrecy::ExposeSecret;

use super::client::{image_part, HttpBackend};
use super::dto::{ChangePasswordRequest, MessageData};
use crate::domain::account::{PasswordChange, ProfileUpdate, UserProfile};
use crate::domain::foundation::ImageUpload;
use crate::domain::session::AccessToken;
use crate::ports::{ApiError, ProfileApi};

const PROFILE_PATH: &str = "/api/user/profile";

#[async_trait]
impl ProfileApi for HttpBackend {
    async fn get_profile(&self, token: &AccessToken) -> Result<UserProfile, ApiError> {
        let builder = self.client().get(self.url(PROFILE_PATH));
        let response = self.send(self.authorized(builder, token)).await?;
        self.read_data::<UserProfile>(response, "profile").await
    }

    async fn update_profile(
        &self,
        token: &AccessToken,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, ApiError> {
        let builder = self.client().put(self.url(PROFILE_PATH)).json(update);
        let response = self.send(self.authorized(builder, token)).await?;
        self.read_data::<UserProfile>(response, "profile").await
    }

    async fn update_profile_image(
        &self,
        token: &AccessToken,
        image: &ImageUpload,
    ) -> Result<UserProfile, ApiError> {
        let form = Form::new().part("profileImage", image_part(image)?);
        let builder = self
            .client()
            .put(self.url("/api/user/profile-image"))
            .multipart(form);
        let response = self.send(self.authorized(builder, token)).await?;
        self.read_data::<UserProfile>(response, "profile").await
    }

    async fn change_password(
        &self,
        token: &AccessToken,
        change: &PasswordChange,
    ) -> Result<String, ApiError> {
        let body = ChangePasswordRequest {
            current_password: change.current_password.expose_secret(),
            new_password: change.new_password.expose_secret(),
        };
        let builder = self
            .client()
            .put(self.url("/api/user/change-password"))
            .json(&body);
        let response = self.send(self.authorized(builder, token)).await?;
        let envelope = self.read_envelope::<MessageData>(response, "profile").await?;
        Ok(envelope
            .data
            .and_then(|d| d.message)
            .or(envelope.message)
            .unwrap_or_default())
    }
}
