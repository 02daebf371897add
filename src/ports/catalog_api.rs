//! Catalog API Port - product listing, lookup and creation.

use async_trait::async_trait;

use super::ApiError;
use crate::domain::catalog::{NewListing, PageRequest, Product, ProductPage};
use crate::domain::foundation::ProductId;
use crate::domain::session::AccessToken;

/// Port for the product endpoints. Every call is authenticated.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /api/products` with the request's query pairs.
    async fn list_products(
        &self,
        token: &AccessToken,
        request: &PageRequest,
    ) -> Result<ProductPage, ApiError>;

    /// `GET /api/products/:id`.
    async fn get_product(&self, token: &AccessToken, id: &ProductId) -> Result<Product, ApiError>;

    /// `POST /api/products` (multipart).
    async fn create_listing(
        &self,
        token: &AccessToken,
        listing: &NewListing,
    ) -> Result<Product, ApiError>;
}
