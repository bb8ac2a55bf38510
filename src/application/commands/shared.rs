// src/application/commands/shared.rs
use std::future::Future;

use tracing::warn;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        form::FormFields,
        ports::cache::CacheInvalidator,
    },
    domain::{errors::DomainResult, slug::Slug},
};

/// Insert attempts before a concurrent slug collision is reported.
pub(crate) const MAX_SLUG_ATTEMPTS: u32 = 3;

/// Allocate a slug and insert, re-allocating from the same base whenever the
/// store rejects the slug as taken by a concurrent writer.
pub(super) async fn insert_with_slug_retry<T, A, AFut, I, IFut>(
    entity: &'static str,
    mut allocate: A,
    mut insert: I,
) -> ApplicationResult<T>
where
    A: FnMut() -> AFut,
    AFut: Future<Output = DomainResult<Slug>>,
    I: FnMut(Slug) -> IFut,
    IFut: Future<Output = DomainResult<T>>,
{
    for attempt in 1..=MAX_SLUG_ATTEMPTS {
        let slug = allocate().await?;
        match insert(slug.clone()).await {
            Ok(record) => return Ok(record),
            Err(err) if err.is_conflict() => {
                warn!(entity, slug = %slug, attempt, "slug claimed concurrently, retrying");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(ApplicationError::conflict(format!(
        "could not allocate a unique {entity} slug"
    )))
}

/// Tell every dependent view it is stale. Failures are logged, never raised.
pub(super) async fn invalidate_views(cache: &dyn CacheInvalidator, paths: &[String]) {
    for path in paths {
        if let Err(err) = cache.invalidate(path).await {
            warn!(view = %path, error = %err, "cache invalidation failed");
        }
    }
}

/// The record id carried by an edit form.
pub(super) fn record_id(form: &FormFields) -> ApplicationResult<i64> {
    let raw = form
        .text("id")
        .ok_or_else(|| ApplicationError::validation("missing id"))?;
    raw.parse::<i64>()
        .map_err(|_| ApplicationError::validation("invalid id"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn record_id_requires_numeric_value() {
        let err = record_id(&FormFields::new()).unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(msg) if msg == "missing id"));

        let err = record_id(&FormFields::new().with("id", "abc")).unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(msg) if msg == "invalid id"));

        assert_eq!(record_id(&FormFields::new().with("id", " 42 ")).unwrap(), 42);
    }

    #[tokio::test]
    async fn retries_until_insert_succeeds() {
        let calls = AtomicU32::new(0);
        let calls = &calls;
        let result = insert_with_slug_retry(
            "product",
            || async { Slug::new("kit") },
            move |slug| async move {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(DomainError::Conflict("slug already exists".into()))
                } else {
                    Ok(slug)
                }
            },
        )
        .await
        .unwrap();

        assert_eq!(result.as_str(), "kit");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn gives_up_after_bounded_attempts() {
        let calls = AtomicU32::new(0);
        let calls = &calls;
        let err = insert_with_slug_retry(
            "vendor",
            || async { Slug::new("kit") },
            move |_slug| async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(DomainError::Conflict("slug already exists".into()))
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApplicationError::Conflict(_)));
        assert_eq!(calls.load(Ordering::SeqCst), MAX_SLUG_ATTEMPTS);
    }

    #[tokio::test]
    async fn other_errors_are_not_retried() {
        let calls = AtomicU32::new(0);
        let calls = &calls;
        let err = insert_with_slug_retry(
            "vendor",
            || async { Slug::new("kit") },
            move |_slug| async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(DomainError::NotFound("vendor not found".into()))
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApplicationError::Domain(DomainError::NotFound(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
