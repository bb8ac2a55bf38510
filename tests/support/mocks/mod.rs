// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod cache;
pub mod catalog;
pub mod time;
pub mod util;

pub use cache::{FailingCacheInvalidator, RecordingCacheInvalidator};
pub use catalog::{ConflictingProductWrite, InMemoryCatalog};
pub use time::fixed_now;
pub use util::DummyClock;
