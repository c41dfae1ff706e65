use super::ArticleQueryService;
use crate::{
    application::{dto::ListArticlesResult, error::ApplicationResult},
    domain::article::{ArticleFilter, ArticlePage},
};

/// Raw listing input. Values are normalised by the service, so callers may
/// pass whatever the client sent.
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub search: Option<String>,
    pub author_name: Option<String>,
    pub page: i64,
    pub limit: i64,
}

impl ArticleQueryService {
    /// Counts then fetches the requested page. The two reads are separate
    /// round trips, so under concurrent writes `total` and the page may come
    /// from different snapshots.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ListArticlesResult> {
        let page = ArticlePage::normalize(query.page, query.limit);
        let filter = ArticleFilter::new(query.search, query.author_name);

        let total = self.read_repo.count(&filter).await?;
        let records = self.read_repo.list_page(&filter, page).await?;

        tracing::debug!(
            total,
            returned = records.len(),
            page = page.page(),
            limit = page.limit(),
            "listed articles"
        );

        Ok(ListArticlesResult {
            articles: records.into_iter().map(Into::into).collect(),
            total,
            page: page.page(),
            limit: page.limit(),
        })
    }
}
