//! New product listings created from the upload screen.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::rules::require_non_empty;
use crate::domain::foundation::{ImageUpload, ValidationError, ValidationErrors};

/// Most images the picker hands over for one listing.
pub const MAX_LISTING_IMAGES: usize = 5;

static PRICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("valid price regex"));

/// Map pin chosen for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValidationError::out_of_range(
                "latitude",
                -90.0,
                90.0,
                self.latitude,
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::out_of_range(
                "longitude",
                -180.0,
                180.0,
                self.longitude,
            ));
        }
        Ok(())
    }
}

/// Form data for `POST /api/products`.
///
/// `price` is kept as typed so it is sent exactly as the user entered it
/// once it passes the format check.
#[derive(Debug, Clone, Default)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: String,
    pub location: Option<Location>,
    pub images: Vec<ImageUpload>,
}

impl NewListing {
    /// Checks every field and reports all failures together.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(require_non_empty("title", &self.title));
        errors.check(require_non_empty("description", &self.description));
        errors.check(validate_price(&self.price));

        match &self.location {
            None => errors.push(ValidationError::empty_field("location")),
            Some(location) => errors.check(location.validate()),
        }

        if self.images.is_empty() {
            errors.push(ValidationError::empty_field("images"));
        } else if self.images.len() > MAX_LISTING_IMAGES {
            errors.push(ValidationError::too_many(
                "images",
                MAX_LISTING_IMAGES,
                self.images.len(),
            ));
        }
        for image in &self.images {
            errors.check(image.validate("images"));
        }

        errors.into_result()
    }

    /// The `location` form field: a JSON object encoded as a string.
    pub fn location_json(&self) -> Option<String> {
        self.location
            .map(|l| serde_json::json!({ "latitude": l.latitude, "longitude": l.longitude }).to_string())
    }
}

fn validate_price(price: &str) -> Result<(), ValidationError> {
    require_non_empty("price", price)?;
    if PRICE_PATTERN.is_match(price.trim()) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(
            "price",
            "please enter a valid price",
        ))
    }
}
