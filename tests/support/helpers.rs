// tests/support/helpers.rs
use super::mocks::{InMemoryArticleStore, SequentialIds, SteppingClock};
use article_api::application::ports::{cache::Cache, time::Clock};
use article_api::application::services::ApplicationServices;
use article_api::domain::article::{ArticleReadRepository, ArticleWriteRepository, AuthorRepository};
use article_api::infrastructure::cache::InMemoryCache;
use article_api::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Request, Response, header::CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_CACHE_TTL: Duration = Duration::from_secs(600);

/// The two authors every scenario starts from.
pub fn seeded_store() -> InMemoryArticleStore {
    InMemoryArticleStore::with_authors(&[("a1", "Ada"), ("a2", "Grace")])
}

pub fn build_services(store: &InMemoryArticleStore, cache: Arc<dyn Cache>) -> Arc<ApplicationServices> {
    build_services_with_reads(store, Arc::new(store.clone()), cache)
}

pub fn build_services_with_reads(
    store: &InMemoryArticleStore,
    reads: Arc<dyn ArticleReadRepository>,
    cache: Arc<dyn Cache>,
) -> Arc<ApplicationServices> {
    assemble(
        store,
        reads,
        Arc::new(store.clone()),
        cache,
        Arc::new(SteppingClock::default()),
    )
}

pub fn build_services_with_authors(
    store: &InMemoryArticleStore,
    authors: Arc<dyn AuthorRepository>,
) -> Arc<ApplicationServices> {
    assemble(
        store,
        Arc::new(store.clone()),
        authors,
        Arc::new(InMemoryCache::new()),
        Arc::new(SteppingClock::default()),
    )
}

pub fn build_services_with_clock(
    store: &InMemoryArticleStore,
    clock: Arc<dyn Clock>,
) -> Arc<ApplicationServices> {
    assemble(
        store,
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(InMemoryCache::new()),
        clock,
    )
}

fn assemble(
    store: &InMemoryArticleStore,
    reads: Arc<dyn ArticleReadRepository>,
    authors: Arc<dyn AuthorRepository>,
    cache: Arc<dyn Cache>,
    clock: Arc<dyn Clock>,
) -> Arc<ApplicationServices> {
    let writes: Arc<dyn ArticleWriteRepository> = Arc::new(store.clone());

    Arc::new(ApplicationServices::new(
        writes,
        reads,
        authors,
        cache,
        clock,
        Arc::new(SequentialIds::default()),
        TEST_CACHE_TTL,
    ))
}

pub fn router_for(services: Arc<ApplicationServices>) -> axum::Router {
    build_router(HttpState { services })
}

/// Router over the seeded store plus handles to inspect afterwards.
pub fn make_test_router() -> (axum::Router, InMemoryArticleStore, InMemoryCache) {
    let store = seeded_store();
    let cache = InMemoryCache::new();
    let services = build_services(&store, Arc::new(cache.clone()));
    (router_for(services), store, cache)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn header_str<'a>(response: &'a Response<Body>, name: &str) -> &'a str {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}
