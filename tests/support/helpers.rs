// tests/support/helpers.rs
use super::builders::new_vendor;
use super::mocks::{DummyClock, InMemoryCatalog, RecordingCacheInvalidator};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use bazaar_core::application::{
    ports::{cache::CacheInvalidator, time::Clock, util::SlugGenerator},
    services::{ApplicationServices, CatalogRepositories},
};
use bazaar_core::domain::{
    product::ProductWriteRepository,
    slug::Slug,
    vendor::Vendor,
};
use bazaar_core::infrastructure::util::DefaultSlugGenerator;
use bazaar_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const DEFAULT_VENDOR_SLUG: &str = "tried-and-true";

/// インメモリストアを使ったアプリケーション一式
pub struct TestApp {
    pub catalog: InMemoryCatalog,
    pub cache: RecordingCacheInvalidator,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        let catalog = InMemoryCatalog::new();
        let cache = RecordingCacheInvalidator::new();
        let services = build_services(
            &catalog,
            Arc::new(catalog.clone()),
            Arc::new(cache.clone()),
        );
        Self {
            catalog,
            cache,
            services,
        }
    }

    /// デフォルトベンダー (tried-and-true) を登録済みの状態で作る
    pub fn with_default_vendor() -> (Self, Vendor) {
        let app = Self::new();
        let vendor = app
            .catalog
            .put_vendor(new_vendor("Tried and True", DEFAULT_VENDOR_SLUG));
        (app, vendor)
    }

    pub fn router(&self) -> axum::Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
        })
    }
}

/// `product_write` と `cache` を差し替えられるサービス構築
pub fn build_services(
    catalog: &InMemoryCatalog,
    product_write: Arc<dyn ProductWriteRepository>,
    cache: Arc<dyn CacheInvalidator>,
) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let repos = CatalogRepositories {
        vendor_write: Arc::new(catalog.clone()),
        vendor_read: Arc::new(catalog.clone()),
        product_write,
        product_read: Arc::new(catalog.clone()),
    };
    Arc::new(ApplicationServices::new(
        repos,
        cache,
        clock,
        slugger,
        Slug::new(DEFAULT_VENDOR_SLUG).unwrap(),
    ))
}

/// application/x-www-form-urlencoded の POST リクエストを組み立てる
pub fn form_request(uri: &str, pairs: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(pairs).expect("encode form");
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// 303 See Other とその Location を検証する
pub fn assert_see_other(resp: &axum::response::Response, expected_location: &str) {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(location, expected_location);
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    msg_field.to_string()
}
