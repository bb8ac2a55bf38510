// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::products::list_products,
        crate::presentation::http::controllers::products::get_product,
        crate::presentation::http::controllers::products::admin_list_products,
        crate::presentation::http::controllers::products::create_product,
        crate::presentation::http::controllers::products::edit_product,
        crate::presentation::http::controllers::products::update_product,
        crate::presentation::http::controllers::vendors::vendor_page,
        crate::presentation::http::controllers::vendors::admin_list_vendors,
        crate::presentation::http::controllers::vendors::create_vendor,
        crate::presentation::http::controllers::vendors::edit_vendor,
        crate::presentation::http::controllers::vendors::update_vendor,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::products::ProductForm,
            crate::presentation::http::controllers::vendors::VendorForm,
            crate::application::dto::ProductView,
            crate::application::dto::ProductEditView,
            crate::application::dto::SelectOption,
            crate::application::dto::VendorSummaryDto,
            crate::application::dto::VendorPageView,
            crate::application::dto::VendorEditView
        )
    ),
    tags(
        (name = "Storefront", description = "Public catalog pages"),
        (name = "Admin", description = "Vendor and product management forms"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Bazaar API",
        description = "Multi-vendor marketplace storefront and admin",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { axum::response::Redirect::permanent("/products") }))
}

/// Write the document to `OPENAPI_SNAPSHOT_PATH` (default
/// `spec/openapi.json`) and return the path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
