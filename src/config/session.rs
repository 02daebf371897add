//! Session policy configuration

use serde::Deserialize;

/// How authenticated calls react to an expired access token
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Attempt one refresh-and-retry before ending the session
    #[serde(default = "default_silent_refresh")]
    pub silent_refresh: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            silent_refresh: default_silent_refresh(),
        }
    }
}

fn default_silent_refresh() -> bool {
    true
}
