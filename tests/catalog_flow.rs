//! Integration tests for the catalog, session and cart flows.
//!
//! These drive a fully wired `Storefront` against `MockBackend`:
//! 1. Login sets the session and authenticates the next catalog fetch
//! 2. Filter changes restart paging at page 1 and replace the list
//! 3. Load-more appends in order and respects `hasNextPage`
//! 4. Failed fetches never disturb the displayed list
//! 5. Responses resolving out of order cannot show stale results

use std::sync::Arc;
use std::time::Duration;

use storefront_client::adapters::mock::{MockBackend, MockCall};
use storefront_client::application::{CatalogSnapshot, ClientError, FetchOutcome, Storefront};
use storefront_client::config::AppConfig;
use storefront_client::domain::account::LoginCredentials;
use storefront_client::domain::catalog::{
    CatalogPhase, Product, ProductPage, ScrollMetrics, SortDirection,
};
use storefront_client::domain::foundation::ProductId;
use storefront_client::domain::session::IssuedTokens;
use storefront_client::ports::ApiError;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn new_app() -> (Storefront, MockBackend) {
    let backend = MockBackend::new();
    let app = Storefront::with_backend(&AppConfig::default(), Arc::new(backend.clone()));
    (app, backend)
}

async fn signed_in_app() -> (Storefront, MockBackend) {
    let (app, backend) = new_app();
    backend.push_login(Ok(IssuedTokens::new("T1", "R1")));
    app.login(&LoginCredentials::new("a@b.com", "x")).await.unwrap();
    backend.clear_calls();
    (app, backend)
}

fn page(prefix: &str, n: usize, has_next_page: bool) -> ProductPage {
    let items = (0..n)
        .map(|i| {
            let id = format!("{}-{}", prefix, i);
            Product::new(ProductId::new(id.clone()).unwrap(), id, 10.0 + i as f64)
        })
        .collect();
    ProductPage::new(items, has_next_page)
}

fn ids(snapshot: &CatalogSnapshot) -> Vec<String> {
    snapshot
        .products
        .iter()
        .map(|p| p.id.as_str().to_string())
        .collect()
}

fn query(pairs: Vec<(&'static str, String)>) -> Vec<(String, String)> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
    list.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Session
// =============================================================================

#[tokio::test]
async fn login_sets_session_and_next_fetch_carries_bearer() {
    let (app, backend) = new_app();
    backend.push_login(Ok(IssuedTokens::new("T1", "R1")));
    backend.push_products(Ok(page("p", 3, false)));

    app.login(&LoginCredentials::new("a@b.com", "x")).await.unwrap();
    let tokens = app.session().tokens().unwrap();
    assert_eq!(tokens.access().expose(), "T1");
    assert_eq!(tokens.refresh().expose(), "R1");

    assert_eq!(app.catalog().start().await, Ok(FetchOutcome::Applied));
    let call = backend.last_call().unwrap();
    assert_eq!(call.token(), Some("T1"));
    assert!(matches!(call, MockCall::ListProducts { .. }));
}

#[tokio::test]
async fn catalog_waits_for_a_session() {
    let (app, backend) = new_app();

    assert_eq!(app.catalog().start().await, Ok(FetchOutcome::Skipped));
    assert_eq!(app.catalog().snapshot().phase, CatalogPhase::Initial);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn expired_session_is_cleared_after_failed_refresh() {
    let (app, backend) = signed_in_app().await;
    let mut watch = app.subscribe_session();
    backend.push_products(Err(ApiError::unauthorized(401)));
    backend.push_refresh(Err(ApiError::unauthorized(401)));

    let err = app.catalog().start().await.unwrap_err();
    assert!(err.is_authentication());
    assert!(!app.is_authenticated());
    assert_eq!(watch.changed().await, Some(false));
}

#[tokio::test]
async fn expired_token_is_refreshed_transparently() {
    let (app, backend) = signed_in_app().await;
    backend.push_products(Err(ApiError::unauthorized(401)));
    backend.push_refresh(Ok(IssuedTokens::new("T2", "R2")));
    backend.push_products(Ok(page("p", 2, false)));

    assert_eq!(app.catalog().start().await, Ok(FetchOutcome::Applied));
    assert_eq!(app.catalog().snapshot().products.len(), 2);

    let tokens: Vec<Option<String>> = backend
        .calls()
        .iter()
        .map(|c| c.token().map(str::to_string))
        .collect();
    assert_eq!(
        tokens,
        vec![Some("T1".to_string()), None, Some("T2".to_string())]
    );
}

#[tokio::test]
async fn logout_clears_session_cart_and_favorites() {
    let (app, backend) = signed_in_app().await;
    backend.push_products(Ok(page("p", 2, false)));
    app.catalog().start().await.unwrap();

    let product = app.catalog().snapshot().products[0].clone();
    app.add_to_cart(&product, 2).unwrap();
    app.toggle_favorite(&product.id);

    app.logout();

    assert!(!app.is_authenticated());
    assert!(app.cart().snapshot().is_empty());
    assert!(app.favorites().is_empty());
    assert!(app.catalog().snapshot().products.is_empty());
    assert_eq!(app.catalog().snapshot().phase, CatalogPhase::Initial);
}

// =============================================================================
// Paging
// =============================================================================

#[tokio::test]
async fn search_resets_paging_and_replaces_list() {
    let (app, backend) = signed_in_app().await;
    let catalog = app.catalog();
    backend.push_products(Ok(page("p1", 10, true)));
    backend.push_products(Ok(page("p2", 10, true)));
    backend.push_products(Ok(page("shoe", 4, false)));

    catalog.start().await.unwrap();
    catalog.load_more().await.unwrap();
    assert_eq!(catalog.snapshot().page, 2);

    assert_eq!(catalog.set_search_term("shoe").await, Ok(FetchOutcome::Applied));

    let requests = backend.product_requests();
    let last = requests.last().unwrap();
    assert_eq!(
        query(last.query_pairs()),
        pairs(&[("page", "1"), ("limit", "10"), ("name", "shoe")])
    );

    let snapshot = catalog.snapshot();
    assert_eq!(snapshot.products.len(), 4);
    assert!(ids(&snapshot).iter().all(|id| id.starts_with("shoe-")));
    assert_eq!(snapshot.page, 1);
    assert!(!snapshot.has_next_page);
}

#[tokio::test]
async fn sort_cycle_from_page_three_restarts_at_page_one() {
    let (app, backend) = signed_in_app().await;
    let catalog = app.catalog();
    for prefix in ["a", "b", "c"] {
        backend.push_products(Ok(page(prefix, 10, true)));
    }
    backend.push_products(Ok(page("sorted", 10, true)));

    catalog.start().await.unwrap();
    catalog.load_more().await.unwrap();
    catalog.load_more().await.unwrap();
    assert_eq!(catalog.snapshot().page, 3);
    assert_eq!(catalog.snapshot().products.len(), 30);

    catalog.cycle_sort().await.unwrap();

    let last = backend.product_requests().pop().unwrap();
    assert_eq!(
        query(last.query_pairs()),
        pairs(&[("page", "1"), ("limit", "10"), ("sortBy", "price"), ("order", "asc")])
    );
    let snapshot = catalog.snapshot();
    assert_eq!(snapshot.sort, SortDirection::Ascending);
    assert_eq!(snapshot.products.len(), 10);
    assert!(ids(&snapshot).iter().all(|id| id.starts_with("sorted-")));
}

#[tokio::test]
async fn sort_cycles_back_to_unsorted() {
    let (app, backend) = signed_in_app().await;
    let catalog = app.catalog();
    for _ in 0..3 {
        backend.push_products(Ok(page("p", 1, false)));
    }

    catalog.cycle_sort().await.unwrap();
    catalog.cycle_sort().await.unwrap();
    catalog.cycle_sort().await.unwrap();

    let orders: Vec<Option<String>> = backend
        .product_requests()
        .iter()
        .map(|r| {
            r.query_pairs()
                .into_iter()
                .find(|(k, _)| *k == "order")
                .map(|(_, v)| v)
        })
        .collect();
    assert_eq!(
        orders,
        vec![Some("asc".to_string()), Some("desc".to_string()), None]
    );
}

#[tokio::test]
async fn load_more_appends_in_order() {
    let (app, backend) = signed_in_app().await;
    let catalog = app.catalog();
    backend.push_products(Ok(page("first", 10, true)));
    backend.push_products(Ok(page("second", 3, false)));

    catalog.start().await.unwrap();
    let before = ids(&catalog.snapshot());

    assert_eq!(catalog.load_more().await, Ok(FetchOutcome::Applied));
    assert_eq!(backend.product_requests()[1].page, 2);

    let after = ids(&catalog.snapshot());
    assert_eq!(after.len(), 13);
    assert_eq!(&after[..10], &before[..]);
    assert_eq!(after[10], "second-0");
    assert_eq!(after[12], "second-2");
}

#[tokio::test]
async fn end_of_list_stops_paging() {
    let (app, backend) = signed_in_app().await;
    let catalog = app.catalog();
    backend.push_products(Ok(page("only", 4, false)));

    catalog.start().await.unwrap();
    assert_eq!(catalog.load_more().await, Ok(FetchOutcome::Skipped));
    assert_eq!(
        catalog.on_scroll(ScrollMetrics::new(900.0, 100.0, 1000.0)).await,
        Ok(FetchOutcome::Skipped)
    );
    assert_eq!(backend.product_requests().len(), 1);
}

#[tokio::test]
async fn refresh_keeps_filter_and_replaces_list() {
    let (app, backend) = signed_in_app().await;
    let catalog = app.catalog();
    backend.push_products(Ok(page("lamp", 10, true)));
    backend.push_products(Ok(page("lamp2", 10, true)));
    backend.push_products(Ok(page("fresh", 5, true)));

    catalog.set_search_term("lamp").await.unwrap();
    catalog.load_more().await.unwrap();

    assert_eq!(catalog.refresh().await, Ok(FetchOutcome::Applied));
    let last = backend.product_requests().pop().unwrap();
    assert_eq!(last.page, 1);
    assert_eq!(last.filter.search_term(), "lamp");

    let snapshot = catalog.snapshot();
    assert_eq!(snapshot.products.len(), 5);
    assert_eq!(snapshot.search_term, "lamp");
    assert_eq!(snapshot.phase, CatalogPhase::Loaded);
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn failed_fetches_leave_list_untouched() {
    let (app, backend) = signed_in_app().await;
    let catalog = app.catalog();
    backend.push_products(Ok(page("p", 10, true)));
    catalog.start().await.unwrap();
    let before = catalog.snapshot().products;

    backend.push_products(Err(ApiError::network("offline")));
    assert!(catalog.refresh().await.is_err());
    assert_eq!(catalog.snapshot().products, before);

    backend.push_products(Err(ApiError::timeout(Duration::from_secs(30))));
    assert!(catalog.load_more().await.is_err());
    assert_eq!(catalog.snapshot().products, before);
    assert!(catalog.snapshot().has_next_page);

    backend.push_products(Err(ApiError::server(500, "boom")));
    let err = catalog.set_search_term("chair").await.unwrap_err();
    assert!(err.is_retryable());

    let snapshot = catalog.snapshot();
    assert_eq!(snapshot.products, before);
    assert_eq!(snapshot.phase, CatalogPhase::Error);
    assert!(snapshot.error.is_some());
    assert!(app.is_authenticated());
}

#[tokio::test]
async fn load_more_after_failed_filter_change_retries_page_one() {
    let (app, backend) = signed_in_app().await;
    let catalog = app.catalog();
    backend.push_products(Ok(page("p", 10, true)));
    backend.push_products(Err(ApiError::network("offline")));
    backend.push_products(Ok(page("chair", 2, false)));

    catalog.start().await.unwrap();
    assert!(catalog.set_search_term("chair").await.is_err());
    assert_eq!(catalog.load_more().await, Ok(FetchOutcome::Applied));

    let last = backend.product_requests().pop().unwrap();
    assert_eq!(last.page, 1);
    assert_eq!(last.filter.search_term(), "chair");
    assert_eq!(catalog.snapshot().products.len(), 2);
}

// =============================================================================
// Ordering
// =============================================================================

#[tokio::test]
async fn out_of_order_responses_cannot_show_stale_results() {
    let (app, backend) = signed_in_app().await;
    let catalog = app.catalog();
    backend.push_products(Ok(page("initial", 10, true)));
    catalog.start().await.unwrap();

    backend.push_products_after(Duration::from_millis(50), Ok(page("a", 10, true)));
    backend.push_products(Ok(page("ab", 2, false)));

    let (slow, fast) = tokio::join!(catalog.set_search_term("a"), catalog.set_search_term("ab"));

    assert_eq!(fast, Ok(FetchOutcome::Applied));
    assert_eq!(slow, Ok(FetchOutcome::Stale));

    let snapshot = catalog.snapshot();
    assert_eq!(snapshot.search_term, "ab");
    assert!(ids(&snapshot).iter().all(|id| id.starts_with("ab-")));
    assert!(!snapshot.has_next_page);
}

#[tokio::test]
async fn stale_failure_does_not_surface_an_error() {
    let (app, backend) = signed_in_app().await;
    let catalog = app.catalog();
    backend.push_products_after(Duration::from_millis(50), Err(ApiError::network("reset")));
    backend.push_products(Ok(page("fresh", 3, false)));

    let (first, second) = tokio::join!(catalog.start(), catalog.refresh());

    assert_eq!(first, Ok(FetchOutcome::Stale));
    assert_eq!(second, Ok(FetchOutcome::Applied));
    let snapshot = catalog.snapshot();
    assert_eq!(snapshot.phase, CatalogPhase::Loaded);
    assert!(snapshot.error.is_none());
}

#[tokio::test]
async fn only_one_load_more_in_flight() {
    let (app, backend) = signed_in_app().await;
    let catalog = app.catalog();
    backend.push_products(Ok(page("p", 10, true)));
    catalog.start().await.unwrap();

    backend.push_products_after(Duration::from_millis(30), Ok(page("q", 10, true)));
    let (first, second) = tokio::join!(catalog.load_more(), catalog.load_more());

    assert_eq!(first, Ok(FetchOutcome::Applied));
    assert_eq!(second, Ok(FetchOutcome::Skipped));
    assert_eq!(backend.product_requests().len(), 2);
    assert_eq!(catalog.snapshot().products.len(), 20);
}

#[tokio::test]
async fn loading_more_phase_is_visible_while_pending() {
    let (app, backend) = signed_in_app().await;
    let catalog = app.catalog();
    backend.push_products(Ok(page("p", 10, true)));
    catalog.start().await.unwrap();

    backend.push_products_after(Duration::from_millis(50), Ok(page("q", 1, false)));
    let observe = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        catalog.snapshot()
    };
    let (outcome, during) = tokio::join!(catalog.load_more(), observe);

    assert_eq!(outcome, Ok(FetchOutcome::Applied));
    assert_eq!(during.phase, CatalogPhase::LoadingMore);
    assert_eq!(during.products.len(), 10);
}

// =============================================================================
// Cart & Favorites
// =============================================================================

#[tokio::test]
async fn cart_merges_repeated_adds() {
    let (app, backend) = signed_in_app().await;
    backend.push_products(Ok(page("p", 2, false)));
    app.catalog().start().await.unwrap();
    let product = app.catalog().snapshot().products[1].clone();

    app.add_to_cart(&product, 1).unwrap();
    app.add_to_cart(&product, 3).unwrap();

    let cart = app.cart().snapshot();
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity(), 4);
    assert!((app.cart().subtotal() - 44.0).abs() < 1e-9);

    let err = app.add_to_cart(&product, 0).unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn favorites_narrow_the_current_list() {
    let (app, backend) = signed_in_app().await;
    backend.push_products(Ok(page("p", 4, false)));
    app.catalog().start().await.unwrap();

    let products = app.catalog().snapshot().products;
    assert!(app.toggle_favorite(&products[3].id));
    assert!(app.toggle_favorite(&products[1].id));

    let favorites: Vec<String> = app
        .favorite_products()
        .iter()
        .map(|p| p.id.as_str().to_string())
        .collect();
    assert_eq!(favorites, vec!["p-1".to_string(), "p-3".to_string()]);

    assert!(!app.toggle_favorite(&products[1].id));
    assert_eq!(app.favorite_products().len(), 1);
}
