use crate::application::ports::cache::{Cache, CacheError, CacheResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Process-local stand-in for [`super::RedisCache`]. TTLs are accepted and
/// ignored: entries live until deleted or the cache is dropped.
#[derive(Default, Clone)]
pub struct InMemoryCache {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lock()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }

    fn lock(&self) -> CacheResult<MutexGuard<'_, HashMap<String, Vec<u8>>>> {
        self.entries
            .lock()
            .map_err(|_| CacheError::Operation("in-memory cache lock poisoned".into()))
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn set_with_ttl(&self, key: &str, value: Vec<u8>, _ttl: Duration) -> CacheResult<()> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> CacheResult<Vec<u8>> {
        self.lock()?
            .get(key)
            .cloned()
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    async fn close(&self) -> CacheResult<()> {
        Ok(())
    }
}
