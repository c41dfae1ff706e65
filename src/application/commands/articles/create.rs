// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        cache_keys::{ARTICLE_LIST_KEY, article_key},
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::cache::{CacheExt, CacheResult},
    },
    domain::{
        article::{ArticleBody, ArticleTitle, AuthorId, NewArticle},
        errors::DomainError,
    },
};

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub author_id: String,
    pub title: String,
    pub body: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    author_id: Option<String>,
    title: Option<String>,
    body: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            author_id: self.author_id.ok_or("author_id is required")?,
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
        })
    }
}

impl ArticleCommandService {
    /// Inserts the article, embeds its author and mirrors the result into the
    /// cache. Store round trips are not wrapped in a transaction; cache
    /// writes are best effort and never fail the request.
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let author_id = AuthorId::new(command.author_id)?;
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;

        if self.author_repo.find_by_id(&author_id).await?.is_none() {
            return Err(ApplicationError::author_not_found(author_id));
        }

        let new_article = NewArticle {
            id: self.ids.next_id()?,
            author_id: author_id.clone(),
            title,
            body,
            created_at: self.clock.now(),
        };

        // The author may be removed between the lookup and the insert.
        let created = self
            .write_repo
            .insert(new_article)
            .await
            .map_err(|err| match err {
                DomainError::NotFound(_) => ApplicationError::author_not_found(author_id.clone()),
                other => other.into(),
            })?;

        // The row is already written, so a miss here is a store fault.
        let author = self
            .author_repo
            .find_by_id(&created.author_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::store(format!(
                    "failed to fetch author {} for article {}",
                    created.author_id, created.id
                ))
            })?;

        let cache_key = article_key(&created.id);
        let article = ArticleDto::from(created.with_author(author));
        tracing::debug!(article_id = %article.id, author_id = %article.author_id, "article created");

        log_cache_failure(
            "populate",
            &cache_key,
            self.cache
                .set_json_with_ttl(&cache_key, &article, self.cache_ttl)
                .await,
        );
        log_cache_failure(
            "invalidate",
            ARTICLE_LIST_KEY,
            self.cache.delete(ARTICLE_LIST_KEY).await,
        );

        Ok(article)
    }
}

fn log_cache_failure(action: &'static str, key: &str, result: CacheResult<()>) {
    if let Err(err) = result {
        tracing::warn!(action, key, error = %err, "cache update failed; continuing");
    }
}
