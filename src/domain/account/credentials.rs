//! Login credentials.

use secrecy::{ExposeSecret, Secret};

use crate::domain::foundation::rules::{require_email, require_non_empty};
use crate::domain::foundation::ValidationErrors;

#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: Secret<String>,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Secret::new(password.into()),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(require_email("email", &self.email));
        errors.check(require_non_empty("password", self.password.expose_secret()));
        errors.into_result()
    }
}
