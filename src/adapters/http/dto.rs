//! Wire types for the storefront backend.
//!
//! Every JSON response uses one envelope: `{ success, message?, data }`,
//! with `pagination` added on the product list. Anything else is a parse
//! error.

use serde::{Deserialize, Serialize};

use crate::domain::session::IssuedTokens;

fn default_success() -> bool {
    true
}

/// Canonical response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Pagination {
    pub has_next_page: bool,
}

/// Error body, read leniently so a message can be shown when there is one.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn message_from(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.trim().to_string())
    }
}

/// `data` of a sign-up response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SignUpData {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub tokens: IssuedTokens,
}

/// `data` of an OTP verification response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifyOtpData {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub is_email_verified: bool,
}

/// `data` of a message-only response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageData {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmailRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChangePasswordRequest<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
}
