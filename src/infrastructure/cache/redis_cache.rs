// src/infrastructure/cache/redis_cache.rs
use crate::application::ports::cache::{Cache, CacheError, CacheResult};
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, PoolConfig, Runtime, Timeouts};
use redis::AsyncCommands;
use std::time::Duration;

/// Redis-backed cache using a pooled async connection.
#[derive(Clone)]
pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    /// Builds the pool from a redis URL (e.g. `redis://:password@host:6379/0`)
    /// and pings the server once so an unreachable cache fails at startup
    /// instead of on the first request. `timeout` bounds the ping and every
    /// later wait for, creation of, or recycling of a pooled connection.
    pub async fn connect(url: &str, timeout: Duration) -> CacheResult<Self> {
        let pool = pool_config(url, timeout)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| CacheError::Connection(err.to_string()))?;

        let cache = Self { pool };
        let ping = async {
            let mut conn = cache.connection().await?;
            let _: String = redis::cmd("PING")
                .query_async(&mut conn)
                .await
                .map_err(|err| CacheError::Connection(err.to_string()))?;
            Ok::<(), CacheError>(())
        };
        tokio::time::timeout(timeout, ping)
            .await
            .map_err(|_| CacheError::Connection(format!("no PING reply within {timeout:?}")))??;

        Ok(cache)
    }

    async fn connection(&self) -> CacheResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| CacheError::Connection(err.to_string()))
    }
}

fn pool_config(url: &str, timeout: Duration) -> DeadpoolConfig {
    let mut timeouts = Timeouts::default();
    timeouts.wait = Some(timeout);
    timeouts.create = Some(timeout);
    timeouts.recycle = Some(timeout);

    let mut config = DeadpoolConfig::from_url(url);
    config.pool = Some(PoolConfig {
        timeouts,
        ..PoolConfig::default()
    });
    config
}

fn operation_error(err: redis::RedisError) -> CacheError {
    CacheError::Operation(err.to_string())
}

#[async_trait]
impl Cache for RedisCache {
    async fn set_with_ttl(&self, key: &str, value: Vec<u8>, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.connection().await?;
        // EX rejects zero.
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds)
            .await
            .map_err(operation_error)
    }

    async fn get(&self, key: &str) -> CacheResult<Vec<u8>> {
        let mut conn = self.connection().await?;
        let value: Option<Vec<u8>> = conn.get(key).await.map_err(operation_error)?;
        value.ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut conn = self.connection().await?;
        let _removed: i64 = conn.del(key).await.map_err(operation_error)?;
        Ok(())
    }

    async fn close(&self) -> CacheResult<()> {
        if !self.pool.is_closed() {
            self.pool.close();
            tracing::debug!("redis cache pool closed");
        }
        Ok(())
    }
}
