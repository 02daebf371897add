//! CreateListingHandler - publishes a new product from the upload screen.

use std::sync::Arc;

use crate::application::{ClientError, SessionGuard};
use crate::domain::catalog::{ImageResolver, NewListing, ProductView};
use crate::ports::CatalogApi;

pub struct CreateListingHandler {
    api: Arc<dyn CatalogApi>,
    guard: Arc<SessionGuard>,
    resolver: ImageResolver,
}

impl CreateListingHandler {
    pub fn new(api: Arc<dyn CatalogApi>, guard: Arc<SessionGuard>, resolver: ImageResolver) -> Self {
        Self {
            api,
            guard,
            resolver,
        }
    }

    /// Validates the listing, uploads it and returns the created product.
    pub async fn handle(&self, listing: &NewListing) -> Result<ProductView, ClientError> {
        listing.validate()?;

        let api = &self.api;
        let product = self
            .guard
            .call(|token| async move { api.create_listing(&token, listing).await })
            .await?;

        tracing::info!("Listing {} created", product.id);
        Ok(self.resolver.view(&product))
    }
}
