//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to the storefront backend:
//! - `http` - reqwest client for the real backend
//! - `mock` - scriptable in-memory backend for tests

pub mod http;
pub mod mock;

pub use http::{HttpBackend, HttpBackendConfig};
pub use mock::{MockBackend, MockCall};
