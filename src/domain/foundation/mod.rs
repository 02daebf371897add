//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, upload payloads, field rules and error types
//! that form the vocabulary of the storefront domain.

mod errors;
mod ids;
pub mod rules;
mod upload;

pub use errors::{ValidationError, ValidationErrors};
pub use ids::ProductId;
pub use upload::ImageUpload;
