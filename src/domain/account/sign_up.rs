//! Sign-up form.

use secrecy::{ExposeSecret, Secret};

use crate::domain::foundation::rules::{
    require_email, require_min_len, require_non_empty, require_phone, MIN_PASSWORD_LEN,
};
use crate::domain::foundation::{ImageUpload, ValidationErrors};

/// Fields collected by the sign-up screen.
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Secret<String>,
    pub phone: String,
    /// Optional photo from the camera or gallery.
    pub profile_image: Option<ImageUpload>,
}

impl SignUpForm {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: Secret::new(password.into()),
            phone: phone.into(),
            profile_image: None,
        }
    }

    pub fn with_profile_image(mut self, image: ImageUpload) -> Self {
        self.profile_image = Some(image);
        self
    }

    /// Checks every field; the request is never sent unless this passes.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(require_non_empty("firstName", &self.first_name));
        errors.check(require_non_empty("lastName", &self.last_name));
        errors.check(require_email("email", &self.email));
        errors.check(require_min_len(
            "password",
            self.password.expose_secret(),
            MIN_PASSWORD_LEN,
        ));
        errors.check(require_phone("phone", &self.phone));
        if let Some(image) = &self.profile_image {
            errors.check(image.validate("profileImage"));
        }
        errors.into_result()
    }
}
