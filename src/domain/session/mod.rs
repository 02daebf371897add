//! Session domain module.
//!
//! Token types and the in-memory session store that every authenticated
//! call site reads from.

mod store;
mod tokens;

pub use store::{SessionStore, SessionWatch};
pub use tokens::{AccessToken, IssuedTokens, RefreshToken, TokenPair};
