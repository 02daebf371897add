//! Mock adapter - in-memory backend for tests and demos.

mod backend;

pub use backend::{MockBackend, MockCall};
