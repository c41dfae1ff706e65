// src/application/cache_keys.rs
use crate::domain::article::ArticleId;

/// Sentinel deleted on every create so list-level caches know to refresh.
/// Nothing writes this key.
pub const ARTICLE_LIST_KEY: &str = "articles:list";

pub fn article_key(id: &ArticleId) -> String {
    format!("article:{id}")
}
