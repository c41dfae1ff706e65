// src/application/ports/cache.rs
//! Key/value cache capability used for best-effort side effects.
//!
//! Implementations store opaque bytes; the typed helpers in [`CacheExt`]
//! own the (JSON) encoding so callers never look at raw values.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use thiserror::Error;

/// Expiry applied by [`Cache::set`].
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

pub type CacheResult<T> = Result<T, CacheError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("cache key not found: {0}")]
    NotFound(String),
    #[error("cache value could not be decoded: {0}")]
    Decode(String),
    #[error("cache value could not be encoded: {0}")]
    Encode(String),
    #[error("cache connection failed: {0}")]
    Connection(String),
    #[error("cache operation failed: {0}")]
    Operation(String),
}

/// All methods may be called concurrently on a shared instance.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Stores `value` under `key` with the given expiry, replacing any
    /// previous value.
    async fn set_with_ttl(&self, key: &str, value: Vec<u8>, ttl: Duration) -> CacheResult<()>;

    /// Returns the stored bytes, or [`CacheError::NotFound`] when the key is
    /// absent or expired.
    async fn get(&self, key: &str) -> CacheResult<Vec<u8>>;

    /// Removes `key`. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Releases underlying connections. Safe to call more than once.
    async fn close(&self) -> CacheResult<()>;

    async fn set(&self, key: &str, value: Vec<u8>) -> CacheResult<()> {
        self.set_with_ttl(key, value, DEFAULT_CACHE_TTL).await
    }
}

/// Typed access on top of any [`Cache`].
#[async_trait]
pub trait CacheExt: Cache {
    async fn set_json<T>(&self, key: &str, value: &T) -> CacheResult<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        self.set_json_with_ttl(key, value, DEFAULT_CACHE_TTL).await
    }

    async fn set_json_with_ttl<T>(&self, key: &str, value: &T, ttl: Duration) -> CacheResult<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        let bytes = serde_json::to_vec(value).map_err(|err| CacheError::Encode(err.to_string()))?;
        self.set_with_ttl(key, bytes, ttl).await
    }

    async fn get_json<T>(&self, key: &str) -> CacheResult<T>
    where
        T: DeserializeOwned,
    {
        let bytes = self.get(key).await?;
        serde_json::from_slice(&bytes).map_err(|err| CacheError::Decode(err.to_string()))
    }
}

impl<C: Cache + ?Sized> CacheExt for C {}
