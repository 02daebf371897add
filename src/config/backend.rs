//! Backend connection configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where the storefront backend lives and how long to wait for it
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Backend origin; relative image paths are resolved against it too
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transport timeout for every request
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Client-side timeout for the product detail fetch
    #[serde(default = "default_detail_timeout")]
    pub detail_timeout_secs: u64,

    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn detail_timeout(&self) -> Duration {
        Duration::from_secs(self.detail_timeout_secs)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Validate backend configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let url = self.base_url.trim();
        let is_https = url.starts_with("https://");
        if !(is_https || url.starts_with("http://")) || url.len() <= "https://".len() {
            return Err(ValidationError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.is_production() && !is_https {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }
        if !(1..=300).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout("request"));
        }
        if !(1..=300).contains(&self.detail_timeout_secs) {
            return Err(ValidationError::InvalidTimeout("detail"));
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            detail_timeout_secs: default_detail_timeout(),
            environment: Environment::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://backend-practice.eurisko.me".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_detail_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_config_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "https://backend-practice.eurisko.me");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.detail_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = BackendConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_production_requires_https() {
        let mut config = BackendConfig {
            base_url: "http://localhost:3000".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        config.environment = Environment::Production;
        assert_eq!(config.validate(), Err(ValidationError::BaseUrlMustBeHttps));
    }

    #[test]
    fn test_timeout_bounds() {
        let config = BackendConfig {
            detail_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout("detail")));

        let config = BackendConfig {
            request_timeout_secs: 301,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout("request")));
    }
}
