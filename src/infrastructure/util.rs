use crate::application::ports::util::ArticleIdGenerator;
use crate::domain::{article::ArticleId, errors::DomainResult};
use uuid::Uuid;

/// Random v4 UUIDs; collision free in practice regardless of how many
/// creates land in the same clock tick.
#[derive(Default, Clone)]
pub struct UuidArticleIdGenerator;

impl ArticleIdGenerator for UuidArticleIdGenerator {
    fn next_id(&self) -> DomainResult<ArticleId> {
        ArticleId::new(Uuid::new_v4().to_string())
    }
}
