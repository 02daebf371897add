//! User profile and the edits the profile screen can make.

use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::catalog::ImageResolver;
use crate::domain::foundation::rules::{require_min_len, require_non_empty, MIN_PASSWORD_LEN};
use crate::domain::foundation::{ValidationError, ValidationErrors};

/// Profile as returned by `GET /api/user/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<ProfileImage>,
    #[serde(default)]
    pub is_email_verified: bool,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Absolute URL of the profile photo, if one is set.
    pub fn avatar_url(&self, resolver: &ImageResolver) -> Option<String> {
        self.profile_image
            .as_ref()
            .filter(|image| !image.url.trim().is_empty())
            .map(|image| resolver.absolute_url(&image.url))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileImage {
    pub url: String,
}

/// Body of `PUT /api/user/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
}

impl ProfileUpdate {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(require_non_empty("firstName", &self.first_name));
        errors.check(require_non_empty("lastName", &self.last_name));
        errors.into_result()
    }
}

/// Change-password form.
///
/// The confirmation never leaves the client; it only guards against typos.
#[derive(Debug, Clone)]
pub struct PasswordChange {
    pub current_password: Secret<String>,
    pub new_password: Secret<String>,
    pub confirm_password: Secret<String>,
}

impl PasswordChange {
    pub fn new(
        current_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            current_password: Secret::new(current_password.into()),
            new_password: Secret::new(new_password.into()),
            confirm_password: Secret::new(confirm_password.into()),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let current = self.current_password.expose_secret();
        let new = self.new_password.expose_secret();

        let mut errors = ValidationErrors::new();
        errors.check(require_non_empty("currentPassword", current));
        errors.check(require_min_len("newPassword", new, MIN_PASSWORD_LEN));
        if !current.is_empty() && current == new {
            errors.push(ValidationError::invalid_format(
                "newPassword",
                "must differ from the current password",
            ));
        }
        if self.confirm_password.expose_secret() != new {
            errors.push(ValidationError::invalid_format(
                "confirmPassword",
                "passwords do not match",
            ));
        }
        errors.into_result()
    }
}
