//! Application layer - handlers, controllers and shared state.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Authenticated calls all go through `SessionGuard`; the product list is
//! driven by `CatalogController`; everything is wired in `Storefront`.

mod catalog_controller;
mod context;
mod error;
pub mod handlers;
mod session_guard;
mod stores;

pub use catalog_controller::{CatalogController, CatalogSnapshot, FetchOutcome};
pub use context::Storefront;
pub use error::ClientError;
pub use handlers::{ProductDetailState, SignUpResult};
pub use session_guard::SessionGuard;
pub use stores::{CartStore, FavoritesStore};
