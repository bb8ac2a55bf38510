// src/presentation/http/controllers/mod.rs
pub mod products;
pub mod vendors;

use crate::application::{dto::Redirect as FormRedirect, error::ApplicationError, form::FormFields};
use crate::presentation::http::error::{HttpError, HttpResult};
use axum::response::Redirect;
use std::collections::HashMap;

/// Numeric record id from a path segment.
pub(crate) fn path_id(raw: &str) -> HttpResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| HttpError::from_error(ApplicationError::validation("invalid id")))
}

/// Edit forms post to `/{id}`; the path wins over any `id` field in the body.
pub(crate) fn edit_form(raw_id: &str, body: HashMap<String, String>) -> HttpResult<FormFields> {
    let id = path_id(raw_id)?;
    let mut form = FormFields::from(body);
    form.insert("id", id.to_string());
    Ok(form)
}

/// Answer a successful submission with `303 See Other`.
pub(crate) fn see_other(target: FormRedirect) -> Redirect {
    Redirect::to(target.location())
}
