// src/presentation/http/controllers/products.rs
use super::{edit_form, path_id, see_other};
use crate::application::{
    dto::{ProductEditView, ProductView},
    form::FormFields,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::Path,
    response::Redirect,
};
use serde::Deserialize;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Fields accepted by the product create and edit forms. Blank values count
/// as missing; on edit, a missing optional field clears the stored value.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct ProductForm {
    pub title: String,
    /// Decimal amount such as `29.00`.
    pub price: String,
    pub slug: Option<String>,
    pub subtitle: Option<String>,
    /// Ignored unless it parses to a positive amount.
    pub sale_price: Option<String>,
    pub short_description: Option<String>,
    /// Older forms send the short description under this name.
    pub description: Option<String>,
    pub long_description: Option<String>,
    /// `DIGITAL_DOWNLOAD`, `LIVE_CLASS`, `BUNDLE` or `PHYSICAL`.
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    /// `DRAFT`, `PENDING_REVIEW`, `PUBLISHED` or `ARCHIVED`.
    pub status: Option<String>,
    pub age_min: Option<String>,
    pub age_max: Option<String>,
    pub sku: Option<String>,
    pub thumbnail_url: Option<String>,
    /// Checked only when the value is `on`.
    pub featured: Option<String>,
    /// Create only.
    pub vendor_id: Option<String>,
    /// Create only; used when `vendorId` is blank.
    pub vendor_slug: Option<String>,
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products, newest first.", body = [ProductView]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Storefront"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ProductView>>> {
    state
        .services
        .product_queries
        .list_products()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/products/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product detail.", body = ProductView),
        (status = 404, description = "Unknown product.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Storefront"
)]
pub async fn get_product(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ProductView>> {
    state
        .services
        .product_queries
        .get_product_by_slug(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/admin/products",
    responses(
        (status = 200, description = "Admin product table.", body = [ProductView])
    ),
    tag = "Admin"
)]
pub async fn admin_list_products(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ProductView>>> {
    list_products(Extension(state)).await
}

#[utoipa::path(
    post,
    path = "/admin/products",
    request_body(content = ProductForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created; `Location` is the product page."),
        (status = 400, description = "Invalid form.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown vendor.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "No unique slug could be allocated.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    Form(body): Form<HashMap<String, String>>,
) -> HttpResult<Redirect> {
    let form = FormFields::from(body);
    state
        .services
        .product_commands
        .create_product(&form)
        .await
        .into_http()
        .map(see_other)
}

#[utoipa::path(
    get,
    path = "/admin/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Values for the edit form.", body = ProductEditView),
        (status = 400, description = "Malformed id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown product.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn edit_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ProductEditView>> {
    let id = path_id(&id)?;
    state
        .services
        .product_queries
        .get_product_for_edit(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body(content = ProductForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Saved; `Location` is the admin product table."),
        (status = 400, description = "Invalid form.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown product.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Form(body): Form<HashMap<String, String>>,
) -> HttpResult<Redirect> {
    let form = edit_form(&id, body)?;
    state
        .services
        .product_commands
        .update_product(&form)
        .await
        .into_http()
        .map(see_other)
}
