use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle, AuthorId};
use chrono::{DateTime, Utc};

/// Authors are owned elsewhere; this crate only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub author_id: AuthorId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
    pub author: Option<Author>,
}

impl Article {
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }
}

/// Listing projection of [`Article`]; the body is left out to keep pages small.
#[derive(Debug, Clone)]
pub struct ArticleListItem {
    pub id: ArticleId,
    pub author_id: AuthorId,
    pub title: ArticleTitle,
    pub created_at: DateTime<Utc>,
    pub author: Option<Author>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: ArticleId,
    pub author_id: AuthorId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
}
