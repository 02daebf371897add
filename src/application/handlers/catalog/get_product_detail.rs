//! GetProductDetailHandler - single product lookup for the detail screen.

use std::sync::Arc;
use std::time::Duration;

use crate::application::{ClientError, SessionGuard};
use crate::domain::catalog::{ImageResolver, ProductView};
use crate::domain::foundation::ProductId;
use crate::ports::{ApiError, CatalogApi};

/// What the detail screen renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProductDetailState {
    /// Request pending.
    #[default]
    Loading,
    Found(ProductView),
    /// The backend has no product with this id.
    NotFound,
    Failed { message: String, retryable: bool },
}

pub struct GetProductDetailHandler {
    api: Arc<dyn CatalogApi>,
    guard: Arc<SessionGuard>,
    resolver: ImageResolver,
    timeout: Duration,
}

impl GetProductDetailHandler {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        guard: Arc<SessionGuard>,
        resolver: ImageResolver,
        timeout: Duration,
    ) -> Self {
        Self {
            api,
            guard,
            resolver,
            timeout,
        }
    }

    /// Fetches the product, giving up after the detail timeout.
    pub async fn handle(&self, id: &ProductId) -> ProductDetailState {
        let api = &self.api;
        let call = self
            .guard
            .call(|token| async move { api.get_product(&token, id).await });

        let result = match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("Product {} timed out after {:?}", id, self.timeout);
                Err(ClientError::Api(ApiError::timeout(self.timeout)))
            }
        };

        match result {
            Ok(product) => ProductDetailState::Found(self.resolver.view(&product)),
            Err(ClientError::Api(ApiError::NotFound { .. })) => ProductDetailState::NotFound,
            Err(e) => ProductDetailState::Failed {
                message: e.user_message(),
                retryable: e.is_retryable(),
            },
        }
    }
}
