// src/infrastructure/cache.rs
use crate::application::{ApplicationResult, ports::cache::CacheInvalidator};
use async_trait::async_trait;
use tracing::debug;

/// Invalidator for deployments without a page cache in front of the app.
/// Every page is rendered per request, so there is nothing to evict; the
/// request is only recorded.
#[derive(Debug, Default, Clone)]
pub struct TracingCacheInvalidator;

#[async_trait]
impl CacheInvalidator for TracingCacheInvalidator {
    async fn invalidate(&self, view_path: &str) -> ApplicationResult<()> {
        debug!(view = view_path, "view invalidated");
        Ok(())
    }
}
