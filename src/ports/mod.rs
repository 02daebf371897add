//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application layer and the remote storefront backend. Adapters
//! implement these ports.
//!
//! - `AuthApi` - Sign-up, OTP verification, login and token refresh
//! - `CatalogApi` - Product listing, lookup and listing creation
//! - `ProfileApi` - Profile read/update, photo and password change
//! - `ApiError` - Transport and backend failure taxonomy

mod auth_api;
mod catalog_api;
mod error;
mod profile_api;

pub use auth_api::{AuthApi, OtpVerified, SignUpOutcome};
pub use catalog_api::CatalogApi;
pub use error::ApiError;
pub use profile_api::ProfileApi;
