//! Catalog domain module.
//!
//! Product records, query/page types, the paging state machine behind the
//! product list, and new-listing forms.

mod listing;
mod product;
mod query;
mod state;

pub use listing::{Location, NewListing, MAX_LISTING_IMAGES};
pub use product::{ImageResolver, Product, ProductImage, ProductView, PLACEHOLDER_ALT_TEXT};
pub use query::{CatalogFilter, PageRequest, ProductPage, SortDirection, SORT_FIELD};
pub use state::{CatalogPhase, CatalogState, FetchKind, FetchTicket, ScrollMetrics};
