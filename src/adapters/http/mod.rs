//! HTTP adapter - reqwest implementation of the backend ports.
//!
//! One `HttpBackend` implements `AuthApi`, `CatalogApi` and `ProfileApi`.
//! Authenticated calls attach `Authorization: Bearer <token>`; status codes
//! and envelopes are mapped to `ApiError` here and nowhere else.

mod auth;
mod catalog;
mod client;
mod dto;
mod profile;

pub use client::{HttpBackend, HttpBackendConfig};
