// tests/support/mocks/cache.rs
use article_api::application::ports::cache::{Cache, CacheError, CacheResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Rejects every call and counts how often it was asked.
#[derive(Default)]
pub struct FailingCache {
    calls: AtomicUsize,
}

impl FailingCache {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> CacheResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CacheError::Connection("cache unreachable".into()))
    }
}

#[async_trait]
impl Cache for FailingCache {
    async fn set_with_ttl(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> CacheResult<()> {
        self.fail()
    }

    async fn get(&self, _key: &str) -> CacheResult<Vec<u8>> {
        self.fail()
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        self.fail()
    }

    async fn close(&self) -> CacheResult<()> {
        Ok(())
    }
}
