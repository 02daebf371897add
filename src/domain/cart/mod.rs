//! Cart domain module.
//!
//! Session-local shopping cart. No network interaction: contents are never
//! sent to the backend and there is no checkout flow.

mod aggregate;

pub use aggregate::{Cart, CartItem};
