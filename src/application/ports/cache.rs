// src/application/ports/cache.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Signals that a rendered view depending on catalog data is stale.
///
/// Callers treat this as fire-and-forget: a failed invalidation is logged and
/// never fails the mutation that triggered it.
#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    async fn invalidate(&self, view_path: &str) -> ApplicationResult<()>;
}
