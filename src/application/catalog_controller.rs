//! Catalog fetch controller.
//!
//! Turns UI events (mount, search edits, sort taps, pull-to-refresh,
//! scrolling) into sequenced product-list requests and merges the results
//! into [`CatalogState`]. The state lock is never held across a request, so
//! events keep flowing while a fetch is pending; the sequence number on each
//! ticket decides which response may land.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::task::JoinHandle;

use super::{ClientError, SessionGuard};
use crate::domain::catalog::{
    CatalogPhase, CatalogState, FetchKind, ImageResolver, ProductView, ScrollMetrics,
    SortDirection,
};
use crate::domain::session::SessionWatch;
use crate::ports::CatalogApi;

/// What happened to a requested fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was merged into the list.
    Applied,
    /// A newer fetch was issued before this one resolved; result dropped.
    Stale,
    /// Nothing was sent (no session, a fetch in flight, no next page, or
    /// an unchanged filter).
    Skipped,
}

/// Render-ready view of the catalog screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub phase: CatalogPhase,
    pub products: Vec<ProductView>,
    pub search_term: String,
    pub sort: SortDirection,
    pub page: u32,
    pub has_next_page: bool,
    pub error: Option<String>,
}

pub struct CatalogController {
    api: Arc<dyn CatalogApi>,
    guard: Arc<SessionGuard>,
    resolver: ImageResolver,
    scroll_threshold: f32,
    state: Mutex<CatalogState>,
}

impl CatalogController {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        guard: Arc<SessionGuard>,
        resolver: ImageResolver,
        page_size: u32,
        scroll_threshold: f32,
    ) -> Self {
        Self {
            api,
            guard,
            resolver,
            scroll_threshold,
            state: Mutex::new(CatalogState::new(page_size)),
        }
    }

    /// Loads page 1 for the current filter. Called on mount.
    pub async fn start(&self) -> Result<FetchOutcome, ClientError> {
        self.fetch(FetchKind::Initial).await
    }

    /// Updates the search term and reloads from page 1 if it changed.
    pub async fn set_search_term(&self, search_term: &str) -> Result<FetchOutcome, ClientError> {
        if !self.lock().set_search_term(search_term) {
            return Ok(FetchOutcome::Skipped);
        }
        self.fetch(FetchKind::FilterChange).await
    }

    /// Advances the sort order (none, ascending, descending) and reloads.
    pub async fn cycle_sort(&self) -> Result<FetchOutcome, ClientError> {
        let sort = self.lock().cycle_sort();
        tracing::debug!("Catalog sort changed to {:?}", sort);
        self.fetch(FetchKind::FilterChange).await
    }

    /// Pull-to-refresh: reloads page 1 keeping search and sort.
    pub async fn refresh(&self) -> Result<FetchOutcome, ClientError> {
        self.fetch(FetchKind::Refresh).await
    }

    /// Fetches the next page if the server reported one and nothing is
    /// in flight.
    pub async fn load_more(&self) -> Result<FetchOutcome, ClientError> {
        self.fetch(FetchKind::LoadMore).await
    }

    /// Loads the next page once the scroll position crosses the threshold.
    pub async fn on_scroll(&self, metrics: ScrollMetrics) -> Result<FetchOutcome, ClientError> {
        if !metrics.is_near_end(self.scroll_threshold) {
            return Ok(FetchOutcome::Skipped);
        }
        self.load_more().await
    }

    /// Drops the list and filter; responses still in flight are discarded.
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Current list with image URLs resolved for display.
    pub fn snapshot(&self) -> CatalogSnapshot {
        let state = self.lock();
        CatalogSnapshot {
            phase: state.phase(),
            products: state.items().iter().map(|p| self.resolver.view(p)).collect(),
            search_term: state.filter().search_term().to_string(),
            sort: state.filter().sort(),
            page: state.page(),
            has_next_page: state.has_next_page(),
            error: state.last_error().map(str::to_string),
        }
    }

    /// Starts a task that loads page 1 each time the session goes from
    /// signed-out to signed-in.
    pub fn follow_session(self: &Arc<Self>, mut watch: SessionWatch) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        let mut was_authenticated = watch.is_authenticated();
        tokio::spawn(async move {
            while let Some(authenticated) = watch.changed().await {
                if authenticated && !was_authenticated {
                    if let Err(e) = controller.start().await {
                        tracing::warn!("Catalog load after sign-in failed: {}", e);
                    }
                }
                was_authenticated = authenticated;
            }
        })
    }

    async fn fetch(&self, kind: FetchKind) -> Result<FetchOutcome, ClientError> {
        if !self.guard.is_authenticated() {
            return Ok(FetchOutcome::Skipped);
        }
        let Some(ticket) = self.lock().begin_fetch(kind) else {
            return Ok(FetchOutcome::Skipped);
        };
        tracing::debug!(
            "Catalog fetch #{} ({:?}) page {}",
            ticket.seq(),
            ticket.kind(),
            ticket.request().page
        );

        let api = &self.api;
        let request = ticket.request();
        let result = self
            .guard
            .call(|token| async move { api.list_products(&token, request).await })
            .await;

        let mut state = self.lock();
        match result {
            Ok(page) => {
                if state.complete(&ticket, page) {
                    Ok(FetchOutcome::Applied)
                } else {
                    tracing::debug!("Discarding stale catalog response #{}", ticket.seq());
                    Ok(FetchOutcome::Stale)
                }
            }
            Err(ClientError::NotAuthenticated) => {
                state.cancel(&ticket);
                Ok(FetchOutcome::Skipped)
            }
            Err(e) => {
                if state.fail(&ticket, e.user_message()) {
                    tracing::warn!("Catalog fetch #{} failed: {}", ticket.seq(), e);
                    Err(e)
                } else {
                    tracing::debug!("Discarding stale catalog failure #{}", ticket.seq());
                    Ok(FetchOutcome::Stale)
                }
            }
        }
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().expect("CatalogController: lock poisoned")
    }
}
