// tests/support/mocks/cache.rs
use async_trait::async_trait;
use bazaar_core::application::{
    ApplicationResult, error::ApplicationError, ports::cache::CacheInvalidator,
};
use std::sync::{Arc, Mutex};

/// 無効化されたビューのパスを記録する
#[derive(Clone, Default)]
pub struct RecordingCacheInvalidator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingCacheInvalidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.paths.lock().unwrap().clear();
    }
}

#[async_trait]
impl CacheInvalidator for RecordingCacheInvalidator {
    async fn invalidate(&self, view_path: &str) -> ApplicationResult<()> {
        self.paths.lock().unwrap().push(view_path.to_string());
        Ok(())
    }
}

/// 常に失敗するキャッシュ無効化
#[derive(Clone, Default)]
pub struct FailingCacheInvalidator;

#[async_trait]
impl CacheInvalidator for FailingCacheInvalidator {
    async fn invalidate(&self, _view_path: &str) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("cache backend unreachable"))
    }
}
