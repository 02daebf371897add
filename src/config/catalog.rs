//! Catalog screen configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Paging and display settings for the product list
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Products requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Load the next page when the unseen content is within this many
    /// viewport-lengths of the end
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f32,

    /// Image shown for products without one (relative to the backend or absolute)
    #[serde(default = "default_placeholder")]
    pub placeholder_image_url: String,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=100).contains(&self.page_size) {
            return Err(ValidationError::InvalidPageSize);
        }
        if !(self.scroll_threshold > 0.0 && self.scroll_threshold <= 1.0) {
            return Err(ValidationError::InvalidScrollThreshold);
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            scroll_threshold: default_scroll_threshold(),
            placeholder_image_url: default_placeholder(),
        }
    }
}

fn default_page_size() -> u32 {
    10
}

fn default_scroll_threshold() -> f32 {
    0.5
}

fn default_placeholder() -> String {
    "/images/placeholder.png".to_string()
}
