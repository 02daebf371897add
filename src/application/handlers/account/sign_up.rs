//! SignUpHandler, VerifyOtpHandler and ResendOtpHandler.

use std::sync::Arc;

use crate::application::ClientError;
use crate::domain::account::{OtpVerification, SignUpForm};
use crate::domain::foundation::rules::require_email;
use crate::domain::foundation::ValidationErrors;
use crate::domain::session::{SessionStore, TokenPair};
use crate::ports::{AuthApi, OtpVerified};

/// Result of a successful sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpResult {
    /// Address the passcode was sent to; the OTP screen needs it.
    pub email: String,
    pub message: Option<String>,
    /// True when the backend also issued a session.
    pub signed_in: bool,
}

pub struct SignUpHandler {
    auth: Arc<dyn AuthApi>,
    session: Arc<SessionStore>,
}

impl SignUpHandler {
    pub fn new(auth: Arc<dyn AuthApi>, session: Arc<SessionStore>) -> Self {
        Self { auth, session }
    }

    pub async fn handle(&self, form: &SignUpForm) -> Result<SignUpResult, ClientError> {
        form.validate()?;

        let outcome = self.auth.sign_up(form).await?;
        let signed_in = match outcome.tokens.and_then(TokenPair::from_issued) {
            Some(pair) => {
                self.session.set_pair(pair);
                true
            }
            None => false,
        };

        tracing::info!("Account created (signed in: {})", signed_in);
        Ok(SignUpResult {
            email: form.email.trim().to_string(),
            message: outcome.message,
            signed_in,
        })
    }
}

pub struct VerifyOtpHandler {
    auth: Arc<dyn AuthApi>,
}

impl VerifyOtpHandler {
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        Self { auth }
    }

    /// Checks the code is six digits, then submits it.
    pub async fn handle(&self, email: &str, code: &str) -> Result<OtpVerified, ClientError> {
        let verification = OtpVerification::new(email, code)?;
        let verified = self.auth.verify_otp(&verification).await?;
        tracing::info!("OTP verified (email verified: {})", verified.email_verified);
        Ok(verified)
    }
}

pub struct ResendOtpHandler {
    auth: Arc<dyn AuthApi>,
}

impl ResendOtpHandler {
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        Self { auth }
    }

    pub async fn handle(&self, email: &str) -> Result<String, ClientError> {
        require_email("email", email).map_err(ValidationErrors::from)?;
        Ok(self.auth.resend_otp(email.trim()).await?)
    }
}
