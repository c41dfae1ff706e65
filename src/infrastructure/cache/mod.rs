// src/infrastructure/cache/mod.rs
mod memory_cache;
mod redis_cache;

pub use memory_cache::InMemoryCache;
pub use redis_cache::RedisCache;
