//! Shared reqwest plumbing for the storefront backend.

use std::time::Duration;

use reqwest::multipart::Part;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::dto::{ApiEnvelope, ErrorBody};
use crate::domain::foundation::ImageUpload;
use crate::domain::session::AccessToken;
use crate::ports::ApiError;

/// Configuration for the HTTP backend.
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Backend origin, e.g. `https://backend-practice.eurisko.me`.
    pub base_url: String,
    /// Transport timeout applied to every request.
    pub timeout: Duration,
}

impl HttpBackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// reqwest implementation of the backend ports.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: HttpBackendConfig,
    client: Client,
}

impl HttpBackend {
    pub fn new(config: HttpBackendConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HttpBackendConfig {
        &self.config
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Joins a path onto the base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    pub(crate) fn authorized(&self, builder: RequestBuilder, token: &AccessToken) -> RequestBuilder {
        builder.header("Authorization", token.bearer())
    }

    /// Sends a request, translating transport failures.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::timeout(self.config.timeout)
            } else if e.is_connect() {
                ApiError::network(format!("Connection failed: {}", e))
            } else {
                ApiError::network(e.to_string())
            }
        })
    }

    /// Checks the status and decodes the canonical envelope.
    ///
    /// `resource` names what a 404 refers to.
    pub(crate) async fn read_envelope<T: DeserializeOwned>(
        &self,
        response: Response,
        resource: &str,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let status = response.status();
        let url = response.url().path().to_string();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = ApiError::from_status(status.as_u16(), ErrorBody::message_from(&body), resource);
            tracing::warn!("{} {} -> {}", url, status.as_u16(), error);
            return Err(error);
        }

        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::timeout(self.config.timeout)
            } else {
                ApiError::network(e.to_string())
            }
        })?;

        let envelope: ApiEnvelope<T> = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::parse(format!("Unexpected response from {}: {}", url, e)))?;

        if !envelope.success {
            let message = envelope.message.unwrap_or_default();
            tracing::warn!("{} reported failure: {}", url, message);
            return Err(ApiError::rejected(status.as_u16(), message));
        }

        tracing::debug!("{} -> {}", url, status.as_u16());
        Ok(envelope)
    }

    /// Decodes the envelope and requires `data` to be present.
    pub(crate) async fn read_data<T: DeserializeOwned>(
        &self,
        response: Response,
        resource: &str,
    ) -> Result<T, ApiError> {
        self.read_envelope::<T>(response, resource)
            .await?
            .data
            .ok_or_else(|| ApiError::parse(format!("{} response has no data", resource)))
    }
}

/// Builds a multipart file part from an upload.
pub(crate) fn image_part(image: &ImageUpload) -> Result<Part, ApiError> {
    Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(&image.mime_type)
        .map_err(|e| ApiError::rejected(0, format!("Invalid image type {}: {}", image.mime_type, e)))
}
