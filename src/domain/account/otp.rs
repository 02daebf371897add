//! One-time passcode sent to the user's e-mail during sign-up.

use std::fmt;

use serde::Serialize;

use crate::domain::foundation::rules::require_email;
use crate::domain::foundation::{ValidationError, ValidationErrors};

/// Number of digits in a passcode.
pub const OTP_LENGTH: usize = 6;

/// A syntactically valid passcode: exactly six ASCII digits.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn parse(code: &str) -> Result<Self, ValidationError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ValidationError::empty_field("otp"));
        }
        if code.len() != OTP_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "otp",
                format!("code must be {} digits", OTP_LENGTH),
            ));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpCode(******)")
    }
}

/// Body of `POST /api/auth/verify-otp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpVerification {
    pub email: String,
    pub otp: OtpCode,
}

impl OtpVerification {
    /// Validates both the address and the code before anything is sent.
    pub fn new(email: &str, code: &str) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(require_email("email", email));
        let otp = match OtpCode::parse(code) {
            Ok(otp) => Some(otp),
            Err(error) => {
                errors.push(error);
                None
            }
        };
        errors.into_result()?;

        match otp {
            Some(otp) => Ok(Self {
                email: email.trim().to_string(),
                otp,
            }),
            None => Err(ValidationError::empty_field("otp").into()),
        }
    }
}
