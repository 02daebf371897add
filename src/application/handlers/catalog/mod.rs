//! Catalog handlers: product detail and listing creation.
//!
//! The paginated list lives in `CatalogController`.

mod create_listing;
mod get_product_detail;

pub use create_listing::CreateListingHandler;
pub use get_product_detail::{GetProductDetailHandler, ProductDetailState};
