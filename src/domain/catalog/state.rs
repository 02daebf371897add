//! Catalog fetch state machine.
//!
//! Pure bookkeeping for the paginated product list: which filter the
//! displayed list belongs to, how far it has been paged, which fetch is the
//! latest one issued, and what the UI should show while fetches are pending.
//!
//! # Sequencing
//!
//! Every fetch gets a monotonically increasing sequence number when it is
//! issued. Only the most recently issued fetch may change the list, flags
//! or error; anything older that resolves later is stale and dropped. This
//! keeps the displayed list consistent when responses resolve out of order.
//!
//! # Merging
//!
//! Page-1 fetches (initial, filter change, sort change, refresh) replace the
//! list. Load-more fetches append to it in order. A failed fetch never
//! touches the list or `has_next_page`.

use super::product::Product;
use super::query::{CatalogFilter, PageRequest, ProductPage, SortDirection};

/// Why a fetch was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    /// First load on mount or when the session becomes available.
    Initial,
    /// Search term or sort order changed.
    FilterChange,
    /// Pull-to-refresh.
    Refresh,
    /// Next page for infinite scroll.
    LoadMore,
}

impl FetchKind {
    /// Page-1 fetches replace the list; load-more appends.
    pub fn replaces_list(self) -> bool {
        !matches!(self, FetchKind::LoadMore)
    }
}

/// Handle for one issued fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    kind: FetchKind,
    request: PageRequest,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn kind(&self) -> FetchKind {
        self.kind
    }

    pub fn request(&self) -> &PageRequest {
        &self.request
    }
}

/// What the UI should render for the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    /// Nothing loaded yet; the list is empty.
    Initial,
    /// Page-1 fetch for a new filter in flight; prior list stays visible.
    Loading,
    /// At least one fetch succeeded and nothing is pending.
    Loaded,
    /// Next page in flight; prior list stays visible.
    LoadingMore,
    /// Pull-to-refresh in flight; prior list stays visible.
    Refreshing,
    /// Last fetch failed; prior list preserved.
    Error,
}

/// Paging state for one catalog screen.
#[derive(Debug, Clone)]
pub struct CatalogState {
    limit: u32,
    filter: CatalogFilter,
    items: Vec<Product>,
    list_filter: Option<CatalogFilter>,
    page: u32,
    has_next_page: bool,
    next_seq: u64,
    in_flight: Option<(u64, FetchKind)>,
    last_error: Option<String>,
}

impl CatalogState {
    /// Creates an empty state fetching `limit` items per page.
    pub fn new(limit: u32) -> Self {
        Self {
            limit: limit.max(1),
            filter: CatalogFilter::default(),
            items: Vec::new(),
            list_filter: None,
            page: 0,
            has_next_page: false,
            next_seq: 1,
            in_flight: None,
            last_error: None,
        }
    }

    /// Current search/sort inputs (what the next page-1 fetch will use).
    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    /// Filter the displayed list was fetched with, if anything was loaded.
    pub fn list_filter(&self) -> Option<&CatalogFilter> {
        self.list_filter.as_ref()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Last page merged into the displayed list (0 before the first load).
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Server-reported flag from the last successful fetch.
    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn in_flight(&self) -> Option<FetchKind> {
        self.in_flight.map(|(_, kind)| kind)
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.in_flight(),
            Some(FetchKind::Initial) | Some(FetchKind::FilterChange)
        )
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight() == Some(FetchKind::Refresh)
    }

    pub fn is_loading_more(&self) -> bool {
        self.in_flight() == Some(FetchKind::LoadMore)
    }

    pub fn phase(&self) -> CatalogPhase {
        match self.in_flight() {
            Some(FetchKind::LoadMore) => CatalogPhase::LoadingMore,
            Some(FetchKind::Refresh) => CatalogPhase::Refreshing,
            Some(_) if self.list_filter.is_none() => CatalogPhase::Initial,
            Some(_) => CatalogPhase::Loading,
            None if self.last_error.is_some() => CatalogPhase::Error,
            None if self.list_filter.is_some() => CatalogPhase::Loaded,
            None => CatalogPhase::Initial,
        }
    }

    /// Updates the search term. Returns false when the trimmed term is
    /// unchanged, in which case no fetch is needed.
    pub fn set_search_term(&mut self, search_term: &str) -> bool {
        let filter = self.filter.with_search_term(search_term);
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        true
    }

    /// Advances the sort control and returns the new direction.
    pub fn cycle_sort(&mut self) -> SortDirection {
        let sort = self.filter.sort().next();
        self.filter = self.filter.with_sort(sort);
        sort
    }

    /// Issues a fetch of the given kind, or `None` when the guards say no.
    ///
    /// Page-1 kinds are always issued and supersede anything in flight.
    /// Load-more is only issued when nothing is in flight and the server
    /// reported another page for the displayed filter. If the displayed
    /// list belongs to another filter (a filter change that failed), a
    /// load-more re-issues page 1 for the current filter instead.
    pub fn begin_fetch(&mut self, kind: FetchKind) -> Option<FetchTicket> {
        let (kind, page) = match kind {
            FetchKind::LoadMore => {
                if self.in_flight.is_some() {
                    return None;
                }
                match &self.list_filter {
                    None => (FetchKind::Initial, 1),
                    Some(shown) if *shown != self.filter => (FetchKind::FilterChange, 1),
                    Some(_) if !self.has_next_page => return None,
                    Some(_) => (FetchKind::LoadMore, self.page + 1),
                }
            }
            other => (other, 1),
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some((seq, kind));

        Some(FetchTicket {
            seq,
            kind,
            request: PageRequest::new(page, self.limit, self.filter.clone()),
        })
    }

    fn is_latest(&self, ticket: &FetchTicket) -> bool {
        matches!(self.in_flight, Some((seq, _)) if seq == ticket.seq)
    }

    /// Applies a successful response. Returns false if the ticket is stale.
    pub fn complete(&mut self, ticket: &FetchTicket, page: ProductPage) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.in_flight = None;
        self.last_error = None;

        if ticket.kind.replaces_list() {
            self.items = page.items;
        } else {
            self.items.extend(page.items);
        }
        self.page = ticket.request.page;
        self.has_next_page = page.has_next_page;
        self.list_filter = Some(ticket.request.filter.clone());
        true
    }

    /// Records a failed fetch. Returns false if the ticket is stale.
    pub fn fail(&mut self, ticket: &FetchTicket, message: impl Into<String>) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.in_flight = None;
        self.last_error = Some(message.into());
        true
    }

    /// Abandons a fetch that was issued but never sent.
    pub fn cancel(&mut self, ticket: &FetchTicket) {
        if self.is_latest(ticket) {
            self.in_flight = None;
        }
    }

    /// Returns to the empty initial state. Sequence numbers keep counting,
    /// so every ticket issued before the reset is stale.
    pub fn reset(&mut self) {
        *self = Self {
            next_seq: self.next_seq,
            ..Self::new(self.limit)
        };
    }
}

/// Scroll position reported by the list view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub viewport: f32,
    pub content: f32,
}

impl ScrollMetrics {
    pub fn new(offset: f32, viewport: f32, content: f32) -> Self {
        Self {
            offset,
            viewport,
            content,
        }
    }

    /// True when the unseen content below the viewport is within
    /// `threshold` viewport-lengths of the end.
    pub fn is_near_end(&self, threshold: f32) -> bool {
        let remaining = self.content - (self.offset + self.viewport);
        remaining <= threshold * self.viewport
    }
}
