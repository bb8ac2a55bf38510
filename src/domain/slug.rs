// src/domain/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, future::Future};

/// URL-safe identifier shared by vendors and products.
///
/// A slug is lowercase ASCII alphanumerics separated by single hyphens, with
/// no leading or trailing hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        let well_formed = !value.starts_with('-')
            && !value.ends_with('-')
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !well_formed {
            return Err(DomainError::Validation(format!(
                "slug '{value}' must be lowercase kebab-case"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// `base-n`, the n-th collision probe.
    pub fn with_suffix(&self, n: u64) -> Self {
        Self(format!("{}-{n}", self.0))
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Turn free text into a slug candidate.
///
/// Every maximal run of characters outside `[a-z0-9]` (after lowercasing)
/// becomes a single `-`, and hyphens at either end are dropped. The result
/// is empty when the input has no ASCII alphanumerics at all.
pub fn generate_slug(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_dash = false;

    for ch in lowered.trim().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else {
            pending_dash = true;
        }
    }

    out
}

/// Probe `base`, `base-1`, `base-2`, ... and return the first slug for which
/// `exists` reports `false`.
///
/// `exists` is scoped to a single entity type; vendor and product slugs are
/// separate namespaces.
pub async fn allocate_unique_slug<F, Fut>(base: &str, mut exists: F) -> DomainResult<Slug>
where
    F: FnMut(Slug) -> Fut,
    Fut: Future<Output = DomainResult<bool>>,
{
    let base = Slug::new(base)?;
    if !exists(base.clone()).await? {
        return Ok(base);
    }

    let mut suffix = 1u64;
    loop {
        let candidate = base.with_suffix(suffix);
        if !exists(candidate.clone()).await? {
            return Ok(candidate);
        }
        suffix += 1;
    }
}
