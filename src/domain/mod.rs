//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, uploads, field rules, errors)
//! - `session` - Token pair and the in-memory session store
//! - `catalog` - Products, paging queries and the list fetch state machine
//! - `cart` - Session-local cart aggregation
//! - `favorites` - Session-local favorites set
//! - `account` - Sign-up, OTP, login and profile forms

pub mod account;
pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod foundation;
pub mod session;
