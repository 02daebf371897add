//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid backend base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Backend base URL must use HTTPS in production")]
    BaseUrlMustBeHttps,

    #[error("Invalid {0} timeout (must be 1..=300 seconds)")]
    InvalidTimeout(&'static str),

    #[error("Invalid page size (must be 1..=100)")]
    InvalidPageSize,

    #[error("Invalid scroll threshold (must be in (0, 1])")]
    InvalidScrollThreshold,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
