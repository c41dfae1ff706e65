use crate::domain::article::{Article, ArticleListItem, Author};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: String,
    pub name: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into(),
            name: author.name,
        }
    }
}

/// Full article as returned by create and stored under `article:<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorDto>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            author_id: article.author_id.into(),
            title: article.title.into(),
            body: article.body.into(),
            created_at: article.created_at,
            author: article.author.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleListItemDto {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorDto>,
}

impl From<ArticleListItem> for ArticleListItemDto {
    fn from(item: ArticleListItem) -> Self {
        Self {
            id: item.id.into(),
            author_id: item.author_id.into(),
            title: item.title.into(),
            created_at: item.created_at,
            author: item.author.map(Into::into),
        }
    }
}

/// One page of the listing. `total` counts every matching row, not just
/// the ones on this page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListArticlesResult {
    pub articles: Vec<ArticleListItemDto>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl ListArticlesResult {
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }
}
