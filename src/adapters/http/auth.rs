//! `AuthApi` over HTTP.

use async_trait::async_trait;
use reqwest::multipart::Form;
use secrecy::ExposeSecret;

use super::client::{image_part, HttpBackend};
use super::dto::{EmailRequest, LoginRequest, MessageData, RefreshRequest, SignUpData, VerifyOtpData};
use crate::domain::account::{LoginCredentials, OtpVerification, SignUpForm};
use crate::domain::session::{IssuedTokens, RefreshToken};
use crate::ports::{ApiError, AuthApi, OtpVerified, SignUpOutcome};

#[async_trait]
impl AuthApi for HttpBackend {
    async fn sign_up(&self, form: &SignUpForm) -> Result<SignUpOutcome, ApiError> {
        let mut multipart = Form::new()
            .text("firstName", form.first_name.trim().to_string())
            .text("lastName", form.last_name.trim().to_string())
            .text("email", form.email.trim().to_string())
            .text("password", form.password.expose_secret().clone())
            .text("phone", form.phone.trim().to_string());
        if let Some(image) = &form.profile_image {
            multipart = multipart.part("profileImage", image_part(image)?);
        }

        tracing::debug!("Signing up {}", form.email.trim());
        let response = self
            .send(self.client().post(self.url("/api/auth/signup")).multipart(multipart))
            .await?;
        let envelope = self.read_envelope::<SignUpData>(response, "account").await?;
        let data = envelope.data.unwrap_or_default();

        let tokens = data
            .tokens
            .access_token
            .is_some()
            .then_some(data.tokens);
        Ok(SignUpOutcome {
            message: data.message.or(envelope.message),
            tokens,
        })
    }

    async fn verify_otp(&self, verification: &OtpVerification) -> Result<OtpVerified, ApiError> {
        let response = self
            .send(self.client().post(self.url("/api/auth/verify-otp")).json(verification))
            .await?;
        let envelope = self.read_envelope::<VerifyOtpData>(response, "account").await?;
        let data = envelope.data.unwrap_or_default();
        Ok(OtpVerified {
            message: data.message.or(envelope.message),
            email_verified: data.is_email_verified,
        })
    }

    async fn resend_otp(&self, email: &str) -> Result<String, ApiError> {
        let response = self
            .send(
                self.client()
                    .post(self.url("/api/auth/resend-verification-otp"))
                    .json(&EmailRequest { email: email.trim() }),
            )
            .await?;
        let envelope = self.read_envelope::<MessageData>(response, "account").await?;
        Ok(envelope
            .data
            .and_then(|d| d.message)
            .or(envelope.message)
            .unwrap_or_default())
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedTokens, ApiError> {
        let body = LoginRequest {
            email: credentials.email.trim(),
            password: credentials.password.expose_secret(),
        };
        let response = self
            .send(self.client().post(self.url("/api/auth/login")).json(&body))
            .await?;
        let envelope = self.read_envelope::<IssuedTokens>(response, "account").await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<IssuedTokens, ApiError> {
        let body = RefreshRequest {
            refresh_token: refresh_token.expose(),
        };
        let response = self
            .send(self.client().post(self.url("/auth/refresh-token")).json(&body))
            .await?;
        self.read_data::<IssuedTokens>(response, "session").await
    }
}
