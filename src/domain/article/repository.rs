use crate::domain::article::entity::{Article, ArticleListItem, Author, NewArticle};
use crate::domain::article::listing::{ArticleFilter, ArticlePage};
use crate::domain::article::value_objects::AuthorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Persists the row and returns it as stored; `author` is left unset.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Number of rows matching `filter`, ignoring pagination.
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64>;

    /// One page of matching rows, newest first, with the author joined in.
    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: ArticlePage,
    ) -> DomainResult<Vec<ArticleListItem>>;
}

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_by_id(&self, id: &AuthorId) -> DomainResult<Option<Author>>;
}
