//! Authenticated-call wrapper.
//!
//! Every authenticated backend call goes through [`SessionGuard::call`],
//! which attaches the current access token and applies one policy for
//! authentication failures: optionally refresh the pair once and retry,
//! otherwise (or if that fails too) end the session.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::ClientError;
use crate::domain::session::{AccessToken, IssuedTokens, SessionStore, TokenPair};
use crate::ports::{ApiError, AuthApi};

pub struct SessionGuard {
    session: Arc<SessionStore>,
    auth: Arc<dyn AuthApi>,
    silent_refresh: bool,
    refresh_lock: Mutex<()>,
}

impl SessionGuard {
    pub fn new(session: Arc<SessionStore>, auth: Arc<dyn AuthApi>, silent_refresh: bool) -> Self {
        Self {
            session,
            auth,
            silent_refresh,
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Runs `op` with the current access token.
    ///
    /// Returns `NotAuthenticated` without calling `op` when there is no
    /// session. On a 401/403 the pair is refreshed at most once and `op`
    /// retried with the new token; if no refresh is possible the session
    /// is cleared and the authentication error returned.
    pub async fn call<T, F, Fut>(&self, op: F) -> Result<T, ClientError>
    where
        F: Fn(AccessToken) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let token = self
            .session
            .access_token()
            .ok_or(ClientError::NotAuthenticated)?;

        let error = match op(token.clone()).await {
            Err(e) if e.is_authentication() => e,
            other => return other.map_err(ClientError::from),
        };

        let Some(fresh) = self.refresh_after(&token).await else {
            self.expire(&token, &error);
            return Err(error.into());
        };

        match op(fresh.clone()).await {
            Err(e) if e.is_authentication() => {
                self.expire(&fresh, &e);
                Err(e.into())
            }
            other => other.map_err(ClientError::from),
        }
    }

    /// Obtains a token newer than `rejected`, refreshing if needed.
    ///
    /// A token stored after `rejected` was sent (a new login, or a refresh
    /// by a concurrent call) is reused without contacting the backend.
    async fn refresh_after(&self, rejected: &AccessToken) -> Option<AccessToken> {
        if let Some(current) = self.session.access_token() {
            if current.expose() != rejected.expose() {
                return Some(current);
            }
        }
        if !self.silent_refresh {
            return None;
        }

        let _guard = self.refresh_lock.lock().await;

        let current = self.session.tokens()?;
        if current.access().expose() != rejected.expose() {
            // Another call refreshed while this one waited.
            return Some(current.access().clone());
        }
        if !current.refresh().is_usable() {
            tracing::debug!("No refresh token available");
            return None;
        }

        tracing::info!("Access token rejected, attempting refresh");
        match self.auth.refresh(current.refresh()).await {
            Ok(issued) => {
                let issued = IssuedTokens {
                    refresh_token: issued
                        .refresh_token
                        .or_else(|| Some(current.refresh().expose().to_string())),
                    ..issued
                };
                let pair = TokenPair::from_issued(issued)?;
                let access = pair.access().clone();
                self.session.set_pair(pair);
                Some(access)
            }
            Err(e) => {
                tracing::warn!("Token refresh failed: {}", e);
                None
            }
        }
    }

    /// Ends the session, unless it has moved on from `rejected`.
    fn expire(&self, rejected: &AccessToken, error: &ApiError) {
        let still_current = self
            .session
            .access_token()
            .is_some_and(|current| current.expose() == rejected.expose());
        if !still_current {
            tracing::debug!("Ignoring rejection of a replaced token: {}", error);
            return;
        }
        tracing::warn!("Authentication failed, ending session: {}", error);
        self.session.logout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::adapters::mock::{MockBackend, MockCall};
    use crate::domain::session::RefreshToken;

    fn guard(backend: &MockBackend, silent_refresh: bool) -> SessionGuard {
        let session = Arc::new(SessionStore::new());
        session.set_tokens(AccessToken::new("T1"), RefreshToken::new("R1"));
        SessionGuard::new(session, Arc::new(backend.clone()), silent_refresh)
    }

    #[tokio::test]
    async fn passes_current_token() {
        let backend = MockBackend::new();
        let guard = guard(&backend, true);

        let seen = guard
            .call(|token| async move { Ok::<_, ApiError>(token.expose().to_string()) })
            .await
            .unwrap();
        assert_eq!(seen, "T1");
    }

    #[tokio::test]
    async fn no_session_is_not_authenticated() {
        let backend = MockBackend::new();
        let guard = SessionGuard::new(Arc::new(SessionStore::new()), Arc::new(backend), true);

        let result = guard.call(|_| async { Ok::<_, ApiError>(()) }).await;
        assert_eq!(result, Err(ClientError::NotAuthenticated));
    }

    #[tokio::test]
    async fn refreshes_once_and_retries() {
        let backend = MockBackend::new();
        backend.push_refresh(Ok(IssuedTokens::new("T2", "R2")));
        let guard = guard(&backend, true);

        let result = guard
            .call(|token| async move {
                if token.expose() == "T1" {
                    Err(ApiError::unauthorized(401))
                } else {
                    Ok(token.expose().to_string())
                }
            })
            .await;

        assert_eq!(result.unwrap(), "T2");
        assert_eq!(guard.session().access_token().unwrap().expose(), "T2");
        assert_eq!(guard.session().refresh_token().unwrap().expose(), "R2");
        assert_eq!(
            backend.calls(),
            vec![MockCall::Refresh {
                refresh_token: "R1".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn failed_refresh_logs_out() {
        let backend = MockBackend::new();
        backend.push_refresh(Err(ApiError::unauthorized(401)));
        let guard = guard(&backend, true);

        let result = guard
            .call(|_| async { Err::<(), _>(ApiError::unauthorized(401)) })
            .await;

        assert!(result.unwrap_err().is_authentication());
        assert!(!guard.is_authenticated());
    }

    #[tokio::test]
    async fn second_rejection_logs_out() {
        let backend = MockBackend::new();
        backend.push_refresh(Ok(IssuedTokens::new("T2", "R2")));
        let guard = guard(&backend, true);

        let result = guard
            .call(|_| async { Err::<(), _>(ApiError::unauthorized(403)) })
            .await;

        assert_eq!(result, Err(ClientError::Api(ApiError::unauthorized(403))));
        assert!(!guard.is_authenticated());
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn without_silent_refresh_logs_out_immediately() {
        let backend = MockBackend::new();
        let guard = guard(&backend, false);

        let result = guard
            .call(|_| async { Err::<(), _>(ApiError::unauthorized(401)) })
            .await;

        assert!(result.is_err());
        assert!(!guard.is_authenticated());
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn late_rejection_of_old_token_keeps_new_session() {
        let backend = MockBackend::new();
        let guard = Arc::new(guard(&backend, false));

        let pending = tokio::spawn({
            let guard = guard.clone();
            async move {
                guard
                    .call(|token| async move {
                        if token.expose() == "T1" {
                            tokio::time::sleep(Duration::from_millis(50)).await;
                            Err(ApiError::unauthorized(401))
                        } else {
                            Ok(token.expose().to_string())
                        }
                    })
                    .await
            }
        });

        tokio::time::sleep(Duration::from_millis(10)).await;
        guard.session().logout();
        guard
            .session()
            .set_tokens(AccessToken::new("T2"), RefreshToken::new("R2"));

        let result = pending.await.unwrap();
        assert_eq!(result, Ok("T2".to_string()));
        assert!(guard.is_authenticated());
        assert_eq!(guard.session().access_token().unwrap().expose(), "T2");
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn rejection_after_logout_does_not_touch_new_login() {
        let backend = MockBackend::new();
        backend.push_refresh(Ok(IssuedTokens::new("T2", "R2")));
        let guard = Arc::new(guard(&backend, true));

        let session = guard.session().clone();
        let result = guard
            .call(move |token| {
                let session = session.clone();
                async move {
                    if token.expose() == "T2" {
                        // Replaced by a new login before the retry resolves.
                        session.set_tokens(AccessToken::new("T3"), RefreshToken::new("R3"));
                    }
                    Err::<(), _>(ApiError::unauthorized(401))
                }
            })
            .await;

        assert!(result.unwrap_err().is_authentication());
        assert_eq!(guard.session().access_token().unwrap().expose(), "T3");
    }

    #[tokio::test]
    async fn other_errors_leave_session_alone() {
        let backend = MockBackend::new();
        let guard = guard(&backend, true);

        let result = guard
            .call(|_| async { Err::<(), _>(ApiError::server(500, "boom")) })
            .await;

        assert!(result.unwrap_err().is_retryable());
        assert!(guard.is_authenticated());
    }

    #[tokio::test]
    async fn refresh_keeps_old_refresh_token_when_none_issued() {
        let backend = MockBackend::new();
        backend.push_refresh(Ok(IssuedTokens {
            access_token: Some("T2".to_string()),
            refresh_token: None,
        }));
        let guard = guard(&backend, true);

        guard
            .call(|token| async move {
                if token.expose() == "T1" {
                    Err(ApiError::unauthorized(401))
                } else {
                    Ok(())
                }
            })
            .await
            .unwrap();
        assert_eq!(guard.session().refresh_token().unwrap().expose(), "R1");
    }
}
