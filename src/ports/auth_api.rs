//! Auth API Port - account creation, verification and token issuance.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::account::{LoginCredentials, OtpVerification, SignUpForm};
use crate::domain::session::{IssuedTokens, RefreshToken};

/// Port for the unauthenticated account endpoints.
///
/// None of these calls carry a bearer token. Callers validate forms before
/// invoking them.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /api/auth/signup` (multipart).
    async fn sign_up(&self, form: &SignUpForm) -> Result<SignUpOutcome, ApiError>;

    /// `POST /api/auth/verify-otp`.
    async fn verify_otp(&self, verification: &OtpVerification) -> Result<OtpVerified, ApiError>;

    /// `POST /api/auth/resend-verification-otp`. Returns the backend message.
    async fn resend_otp(&self, email: &str) -> Result<String, ApiError>;

    /// `POST /api/auth/login`.
    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedTokens, ApiError>;

    /// `POST /auth/refresh-token`.
    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<IssuedTokens, ApiError>;
}

/// Result of a sign-up request.
#[derive(Debug, Clone, Default)]
pub struct SignUpOutcome {
    /// Message from the backend, typically asking for the e-mailed code.
    pub message: Option<String>,
    /// Present when the backend signs the user in immediately.
    pub tokens: Option<IssuedTokens>,
}

/// Result of a passcode verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpVerified {
    pub message: Option<String>,
    pub email_verified: bool,
}
