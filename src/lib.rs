//! Storefront Client - core of a mobile storefront app.
//!
//! Session handling, the paginated product catalog, cart, favorites and
//! account flows over the storefront REST backend. Screens, navigation and
//! image capture live in the host UI and consume the state produced here.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
