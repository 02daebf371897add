//! `CatalogApi` over HTTP.

use async_trait::async_trait;
use reqwest::multipart::Form;

use super::client::{image_part, HttpBackend};
use crate::domain::catalog::{NewListing, PageRequest, Product, ProductPage};
use crate::domain::foundation::ProductId;
use crate::domain::session::AccessToken;
use crate::ports::{ApiError, CatalogApi};

#[async_trait]
impl CatalogApi for HttpBackend {
    async fn list_products(
        &self,
        token: &AccessToken,
        request: &PageRequest,
    ) -> Result<ProductPage, ApiError> {
        let builder = self
            .client()
            .get(self.url("/api/products"))
            .query(&request.query_pairs());
        tracing::debug!("Fetching products page {}", request.page);

        let response = self.send(self.authorized(builder, token)).await?;
        let envelope = self.read_envelope::<Vec<Product>>(response, "products").await?;

        let items = envelope
            .data
            .ok_or_else(|| ApiError::parse("products response has no data"))?;
        let pagination = envelope
            .pagination
            .ok_or_else(|| ApiError::parse("products response has no pagination"))?;
        Ok(ProductPage::new(items, pagination.has_next_page))
    }

    async fn get_product(&self, token: &AccessToken, id: &ProductId) -> Result<Product, ApiError> {
        let builder = self
            .client()
            .get(self.url(&format!("/api/products/{}", id.as_str())));
        let response = self.send(self.authorized(builder, token)).await?;
        self.read_data::<Product>(response, "product").await
    }

    async fn create_listing(
        &self,
        token: &AccessToken,
        listing: &NewListing,
    ) -> Result<Product, ApiError> {
        let mut form = Form::new()
            .text("title", listing.title.trim().to_string())
            .text("description", listing.description.trim().to_string())
            .text("price", listing.price.trim().to_string());
        if let Some(location) = listing.location_json() {
            form = form.text("location", location);
        }
        for image in &listing.images {
            form = form.part("images", image_part(image)?);
        }

        tracing::info!("Creating listing '{}' with {} image(s)", listing.title.trim(), listing.images.len());
        let builder = self.client().post(self.url("/api/products")).multipart(form);
        let response = self.send(self.authorized(builder, token)).await?;
        self.read_data::<Product>(response, "product").await
    }
}
