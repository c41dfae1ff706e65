// tests/support/mocks/util.rs
use article_api::application::ports::util::ArticleIdGenerator;
use article_api::domain::{article::ArticleId, errors::DomainResult};
use std::sync::atomic::{AtomicU64, Ordering};

/// `article-0001`, `article-0002`, ...
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl ArticleIdGenerator for SequentialIds {
    fn next_id(&self) -> DomainResult<ArticleId> {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        ArticleId::new(format!("article-{n:04}"))
    }
}

/// Hands out the same id every time, to provoke primary key conflicts.
pub struct ConstantId(pub &'static str);

impl ArticleIdGenerator for ConstantId {
    fn next_id(&self) -> DomainResult<ArticleId> {
        ArticleId::new(self.0)
    }
}
