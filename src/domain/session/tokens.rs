//! Bearer credentials issued by the backend.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// Short-lived bearer credential attached to authenticated requests.
#[derive(Debug, Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Secret::new(token.into()))
    }

    /// Exposes the raw token (for building request headers).
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Value of the `Authorization` header for this token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.expose())
    }
}

/// Longer-lived credential used to mint a new access token.
#[derive(Debug, Clone)]
pub struct RefreshToken(Secret<String>);

impl RefreshToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Secret::new(token.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// An empty refresh token cannot be exchanged.
    pub fn is_usable(&self) -> bool {
        !self.expose().trim().is_empty()
    }
}

/// The access/refresh pair, always replaced as a unit.
#[derive(Debug, Clone)]
pub struct TokenPair {
    access: AccessToken,
    refresh: RefreshToken,
}

impl TokenPair {
    pub fn new(access: AccessToken, refresh: RefreshToken) -> Self {
        Self { access, refresh }
    }

    /// Builds a pair from what the server returned.
    ///
    /// Returns `None` unless a non-empty access token is present. A missing
    /// refresh token becomes an unusable (empty) one.
    pub fn from_issued(issued: IssuedTokens) -> Option<Self> {
        let access = issued
            .access_token
            .filter(|token| !token.trim().is_empty())?;
        let refresh = issued.refresh_token.unwrap_or_default();
        Some(Self::new(AccessToken::new(access), RefreshToken::new(refresh)))
    }

    pub fn access(&self) -> &AccessToken {
        &self.access
    }

    pub fn refresh(&self) -> &RefreshToken {
        &self.refresh
    }
}

/// Raw token fields as they appear in login, sign-up and refresh responses.
///
/// Both fields are optional on the wire; callers decide whether what came
/// back is enough to start a session.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedTokens {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl IssuedTokens {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token: Some(refresh_token.into()),
        }
    }
}
