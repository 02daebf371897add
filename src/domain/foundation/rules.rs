//! Field-level checks shared by the account and listing forms.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("valid phone regex"));

/// Minimum password length accepted by sign-up and password change.
pub const MIN_PASSWORD_LEN: usize = 6;

pub fn require_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::empty_field(field))
    } else {
        Ok(())
    }
}

pub fn require_min_len(field: &str, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        Err(ValidationError::too_short(field, min))
    } else {
        Ok(())
    }
}

pub fn require_email(field: &str, value: &str) -> Result<(), ValidationError> {
    require_non_empty(field, value)?;
    if EMAIL_PATTERN.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(field, "invalid email"))
    }
}

pub fn require_phone(field: &str, value: &str) -> Result<(), ValidationError> {
    if PHONE_PATTERN.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(
            field,
            "phone number must be 10 digits",
        ))
    }
}
