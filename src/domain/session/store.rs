//! In-memory session store.
//!
//! Single authoritative holder of the bearer credential pair. Every
//! authenticated call reads the current access token from here; only the
//! login, sign-up, refresh and logout flows write it.
//!
//! The pair lives in a `tokio::sync::watch` channel so that the UI layer can
//! observe the "session ended" transition and route back to the entry
//! screen. Tokens are never persisted.

use tokio::sync::watch;

use super::tokens::{AccessToken, RefreshToken, TokenPair};

/// Holder of the current token pair.
#[derive(Debug)]
pub struct SessionStore {
    state: watch::Sender<Option<TokenPair>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates an empty (unauthenticated) store.
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self { state }
    }

    /// Replaces both tokens unconditionally.
    ///
    /// No validation of token shape happens here; callers check what the
    /// server returned before calling this.
    pub fn set_tokens(&self, access: AccessToken, refresh: RefreshToken) {
        self.set_pair(TokenPair::new(access, refresh));
    }

    /// Replaces the pair with an already-built one.
    pub fn set_pair(&self, pair: TokenPair) {
        self.state.send_replace(Some(pair));
        tracing::debug!("Session tokens set");
    }

    /// Resets both tokens to absent.
    pub fn clear_tokens(&self) {
        self.state.send_replace(None);
    }

    /// Ends the session. Subscribers observe the transition to unauthenticated.
    pub fn logout(&self) {
        self.clear_tokens();
        tracing::info!("Session cleared");
    }

    pub fn access_token(&self) -> Option<AccessToken> {
        self.state.borrow().as_ref().map(|pair| pair.access().clone())
    }

    pub fn refresh_token(&self) -> Option<RefreshToken> {
        self.state.borrow().as_ref().map(|pair| pair.refresh().clone())
    }

    pub fn tokens(&self) -> Option<TokenPair> {
        self.state.borrow().clone()
    }

    /// A consumer is authenticated exactly when an access token is present.
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Subscribes to authentication-state changes.
    pub fn subscribe(&self) -> SessionWatch {
        SessionWatch {
            receiver: self.state.subscribe(),
        }
    }
}

/// Observer of session transitions (login, logout, refresh).
#[derive(Debug)]
pub struct SessionWatch {
    receiver: watch::Receiver<Option<TokenPair>>,
}

impl SessionWatch {
    /// Current authentication state.
    pub fn is_authenticated(&self) -> bool {
        self.receiver.borrow().is_some()
    }

    /// Waits for the next session change and returns the new
    /// authentication state, or `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<bool> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().is_some())
    }
}
