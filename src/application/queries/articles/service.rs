use std::sync::Arc;

use crate::domain::article::{ArticleReadRepository, AuthorRepository};

/// Read side of the article API. Listing always goes to the store; the
/// cache is only touched by writes.
pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
    ) -> Self {
        Self {
            read_repo,
            author_repo,
        }
    }
}
