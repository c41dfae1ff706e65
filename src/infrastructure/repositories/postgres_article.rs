// src/infrastructure/repositories/postgres_article.rs
use super::{error::map_row_decode, map_sqlx};
use crate::domain::article::{
    Article, ArticleBody, ArticleFilter, ArticleId, ArticleListItem, ArticlePage,
    ArticleReadRepository, ArticleTitle, ArticleWriteRepository, Author, AuthorId, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const LIST_FROM: &str = " FROM articles a LEFT JOIN authors au ON a.author_id = au.id";
const SEARCH_COLUMNS: &[&str] = &["a.title", "a.body"];
const AUTHOR_NAME_COLUMNS: &[&str] = &["au.name"];

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    author_id: String,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            author_id: AuthorId::new(row.author_id)?,
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            created_at: row.created_at,
            author: None,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleListRow {
    id: String,
    author_id: String,
    title: String,
    created_at: DateTime<Utc>,
    author_ref_id: Option<String>,
    author_name: Option<String>,
}

impl TryFrom<ArticleListRow> for ArticleListItem {
    type Error = DomainError;

    fn try_from(row: ArticleListRow) -> Result<Self, Self::Error> {
        let author = match (row.author_ref_id, row.author_name) {
            (Some(id), Some(name)) => Some(Author {
                id: AuthorId::new(id)?,
                name,
            }),
            _ => None,
        };

        Ok(ArticleListItem {
            id: ArticleId::new(row.id)?,
            author_id: AuthorId::new(row.author_id)?,
            title: ArticleTitle::new(row.title)?,
            created_at: row.created_at,
            author,
        })
    }
}

/// A single `WHERE` term. Each column is matched against the same pattern
/// and the matches are OR-ed; terms are AND-ed together.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Predicate {
    columns: &'static [&'static str],
    pattern: String,
}

impl Predicate {
    fn contains(columns: &'static [&'static str], needle: &str) -> Self {
        Self {
            columns,
            pattern: contains_pattern(needle),
        }
    }
}

/// `%needle%` with LIKE metacharacters escaped so the needle matches
/// literally. Backslash is the default escape character for `ILIKE`.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn predicates(filter: &ArticleFilter) -> Vec<Predicate> {
    let mut predicates = Vec::with_capacity(2);
    if let Some(search) = filter.search() {
        predicates.push(Predicate::contains(SEARCH_COLUMNS, search));
    }
    if let Some(author_name) = filter.author_name() {
        predicates.push(Predicate::contains(AUTHOR_NAME_COLUMNS, author_name));
    }
    predicates
}

fn push_predicates(builder: &mut QueryBuilder<'_, Postgres>, predicates: &[Predicate]) {
    for (index, predicate) in predicates.iter().enumerate() {
        builder.push(if index == 0 { " WHERE (" } else { " AND (" });
        for (column_index, column) in predicate.columns.iter().enumerate() {
            if column_index > 0 {
                builder.push(" OR ");
            }
            builder.push(*column);
            builder.push(" ILIKE ");
            builder.push_bind(predicate.pattern.clone());
        }
        builder.push(")");
    }
}

fn count_query(filter: &ArticleFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*)");
    builder.push(LIST_FROM);
    push_predicates(&mut builder, &predicates(filter));
    builder
}

fn page_query(filter: &ArticleFilter, page: ArticlePage) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT a.id, a.author_id, a.title, a.created_at, au.id AS author_ref_id, au.name AS author_name",
    );
    builder.push(LIST_FROM);
    push_predicates(&mut builder, &predicates(filter));
    builder.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
    builder.push_bind(i64::from(page.limit()));
    builder.push(" OFFSET ");
    builder.push_bind(page.offset());
    builder
}

fn decode_list_rows(rows: Vec<ArticleListRow>) -> DomainResult<Vec<ArticleListItem>> {
    rows.into_iter()
        .map(|row| ArticleListItem::try_from(row).map_err(map_row_decode))
        .collect()
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            id,
            author_id,
            title,
            body,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (id, author_id, title, body, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, author_id, title, body, created_at",
        )
        .bind(id.as_str())
        .bind(author_id.as_str())
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row).map_err(map_row_decode)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let total: i64 = count_query(filter)
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        u64::try_from(total)
            .map_err(|_| DomainError::Persistence(format!("invalid article count: {total}")))
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: ArticlePage,
    ) -> DomainResult<Vec<ArticleListItem>> {
        let rows = page_query(filter, page)
            .build_query_as::<ArticleListRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        decode_list_rows(rows)
    }
}
