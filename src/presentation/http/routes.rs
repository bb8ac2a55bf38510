// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{products, vendors},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

/// Router with permissive CORS, for tests and local tooling.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_origins(state, &[])
}

/// Router whose CORS policy admits only `allowed_origins`; an empty list
/// admits any origin.
pub fn build_router_with_origins(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/products", get(products::list_products))
        .route("/products/{slug}", get(products::get_product))
        .route("/vendors/{slug}", get(vendors::vendor_page))
        .route(
            "/admin/products",
            get(products::admin_list_products).post(products::create_product),
        )
        .route(
            "/admin/products/{id}",
            get(products::edit_product).post(products::update_product),
        )
        .route(
            "/admin/vendors",
            get(vendors::admin_list_vendors).post(vendors::create_vendor),
        )
        .route(
            "/admin/vendors/{id}",
            get(vendors::edit_vendor).post(vendors::update_vendor),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        base.allow_origin(tower_http::cors::Any)
    } else {
        base.allow_origin(origins)
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
