//! Product records and their display-ready projection.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ProductId;

/// Alt text attached to the placeholder image.
pub const PLACEHOLDER_ALT_TEXT: &str = "No image available";

/// A product as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Product {
    /// Minimal product, mostly useful for tests and fixtures.
    pub fn new(id: ProductId, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            price,
            images: Vec::new(),
            category: None,
            stock: None,
            rating: None,
            review_count: None,
            features: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(ProductImage::new(url));
        self
    }
}

/// One image of a product. `url` may be relative to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl ProductImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: None,
        }
    }
}

/// Display-ready product: absolute image URLs, never an empty image list.
///
/// Only [`ImageResolver::view`] builds one, so the image list cannot be
/// emptied from outside:
///
/// ```compile_fail
/// use storefront_client::domain::catalog::{ProductImage, ProductView};
/// use storefront_client::domain::foundation::ProductId;
///
/// let view = ProductView {
///     id: ProductId::new("p1").unwrap(),
///     title: String::new(),
///     description: String::new(),
///     price: 1.0,
///     images: Vec::<ProductImage>::new(),
///     category: None,
///     stock: None,
///     rating: None,
///     review_count: None,
///     features: Vec::new(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    images: Vec<ProductImage>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub rating: Option<f32>,
    pub review_count: Option<u32>,
    pub features: Vec<String>,
}

impl ProductView {
    /// Resolved images, never empty.
    pub fn images(&self) -> &[ProductImage] {
        &self.images
    }

    /// First image; the placeholder when the product has none.
    pub fn primary_image(&self) -> &ProductImage {
        &self.images[0]
    }
}

/// Rewrites image references against the backend's base address.
///
/// Applied at render time rather than fetch time, so a base-address change
/// never requires a re-fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    base_url: String,
    placeholder_url: String,
}

impl ImageResolver {
    pub fn new(base_url: impl Into<String>, placeholder_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            placeholder_url: placeholder_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute form of `url`. Already-absolute URLs pass through unchanged.
    pub fn absolute_url(&self, url: &str) -> String {
        let url = url.trim();
        if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("data:")
        {
            return url.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            url.trim_start_matches('/')
        )
    }

    /// Normalizes an image list: blank entries dropped, relative paths made
    /// absolute, a single placeholder when nothing usable remains.
    pub fn resolve_images(&self, images: &[ProductImage]) -> Vec<ProductImage> {
        let resolved: Vec<ProductImage> = images
            .iter()
            .filter(|image| !image.url.trim().is_empty())
            .map(|image| ProductImage {
                url: self.absolute_url(&image.url),
                alt_text: image.alt_text.clone(),
            })
            .collect();

        if resolved.is_empty() {
            vec![self.placeholder()]
        } else {
            resolved
        }
    }

    pub fn placeholder(&self) -> ProductImage {
        ProductImage {
            url: self.absolute_url(&self.placeholder_url),
            alt_text: Some(PLACEHOLDER_ALT_TEXT.to_string()),
        }
    }

    pub fn view(&self, product: &Product) -> ProductView {
        ProductView {
            id: product.id.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            images: self.resolve_images(&product.images),
            category: product.category.clone(),
            stock: product.stock,
            rating: product.rating,
            review_count: product.review_count,
            features: product.features.clone(),
        }
    }
}
