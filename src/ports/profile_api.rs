//! Profile API Port.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::account::{PasswordChange, ProfileUpdate, UserProfile};
use crate::domain::foundation::ImageUpload;
use crate::domain::session::AccessToken;

/// Port for the signed-in user's profile endpoints.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// `GET /api/user/profile`.
    async fn get_profile(&self, token: &AccessToken) -> Result<UserProfile, ApiError>;

    /// `PUT /api/user/profile`.
    async fn update_profile(
        &self,
        token: &AccessToken,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, ApiError>;

    /// `PUT /api/user/profile-image` (multipart `profileImage`).
    async fn update_profile_image(
        &self,
        token: &AccessToken,
        image: &ImageUpload,
    ) -> Result<UserProfile, ApiError>;

    /// `PUT /api/user/change-password`. Returns the backend message.
    async fn change_password(
        &self,
        token: &AccessToken,
        change: &PasswordChange,
    ) -> Result<String, ApiError>;
}
