// src/application/ports/util.rs
use crate::domain::{article::ArticleId, errors::DomainResult};

/// Source of identifiers for newly created articles. Implementations must
/// not hand out the same id twice, even under concurrent creates.
pub trait ArticleIdGenerator: Send + Sync {
    fn next_id(&self) -> DomainResult<ArticleId>;
}
