// src/application/commands/articles/service.rs
use std::{sync::Arc, time::Duration};

use crate::{
    application::ports::{
        cache::{Cache, DEFAULT_CACHE_TTL},
        time::Clock,
        util::ArticleIdGenerator,
    },
    domain::article::{ArticleWriteRepository, AuthorRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) cache: Arc<dyn Cache>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) ids: Arc<dyn ArticleIdGenerator>,
    pub(super) cache_ttl: Duration,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        cache: Arc<dyn Cache>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn ArticleIdGenerator>,
    ) -> Self {
        Self {
            write_repo,
            author_repo,
            cache,
            clock,
            ids,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Overrides the expiry used for `article:<id>` entries.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}
