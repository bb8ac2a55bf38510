// src/presentation/http/controllers/vendors.rs
use super::{edit_form, path_id, see_other};
use crate::application::{
    dto::{VendorEditView, VendorPageView, VendorSummaryDto},
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

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct VendorForm {
    pub name: String,
    /// Create only; derived from `name` when blank.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub location: Option<String>,
    /// Between 0 (exclusive) and 1; anything else is dropped.
    pub default_commission: Option<String>,
    /// `PENDING`, `ACTIVE` or `SUSPENDED`.
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/vendors/{slug}",
    params(("slug" = String, Path, description = "Vendor slug")),
    responses(
        (status = 200, description = "Vendor page with its products.", body = VendorPageView),
        (status = 404, description = "Unknown vendor.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Storefront"
)]
pub async fn vendor_page(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<VendorPageView>> {
    state
        .services
        .vendor_queries
        .get_vendor_page(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/admin/vendors",
    responses(
        (status = 200, description = "Admin vendor table.", body = [VendorSummaryDto])
    ),
    tag = "Admin"
)]
pub async fn admin_list_vendors(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<VendorSummaryDto>>> {
    state
        .services
        .vendor_queries
        .list_vendor_summaries()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/vendors",
    request_body(content = VendorForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created; `Location` is the vendor page."),
        (status = 400, description = "Invalid form.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "No unique slug could be allocated.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create_vendor(
    Extension(state): Extension<HttpState>,
    Form(body): Form<HashMap<String, String>>,
) -> HttpResult<Redirect> {
    let form = FormFields::from(body);
    state
        .services
        .vendor_commands
        .create_vendor(&form)
        .await
        .into_http()
        .map(see_other)
}

#[utoipa::path(
    get,
    path = "/admin/vendors/{id}",
    params(("id" = i64, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Values for the edit form.", body = VendorEditView),
        (status = 404, description = "Unknown vendor.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn edit_vendor(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<VendorEditView>> {
    let id = path_id(&id)?;
    state
        .services
        .vendor_queries
        .get_vendor_for_edit(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/vendors/{id}",
    params(("id" = i64, Path, description = "Vendor id")),
    request_body(content = VendorForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Saved; `Location` is the admin vendor table."),
        (status = 400, description = "Invalid form.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown vendor.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn update_vendor(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Form(body): Form<HashMap<String, String>>,
) -> HttpResult<Redirect> {
    let form = edit_form(&id, body)?;
    state
        .services
        .vendor_commands
        .update_vendor(&form)
        .await
        .into_http()
        .map(see_other)
}
