// src/application/services/mod.rs
use std::{sync::Arc, time::Duration};

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{ArticleIdGeneratorPort, CachePort, ClockPort},
        queries::articles::ArticleQueryService,
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository, AuthorRepository},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    cache: Arc<CachePort>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        cache: Arc<CachePort>,
        clock: Arc<ClockPort>,
        id_generator: Arc<ArticleIdGeneratorPort>,
        article_cache_ttl: Duration,
    ) -> Self {
        let article_commands = Arc::new(
            ArticleCommandService::new(
                Arc::clone(&article_write_repo),
                Arc::clone(&author_repo),
                Arc::clone(&cache),
                Arc::clone(&clock),
                Arc::clone(&id_generator),
            )
            .with_cache_ttl(article_cache_ttl),
        );

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&author_repo),
        ));

        Self {
            article_commands,
            article_queries,
            cache,
        }
    }

    pub fn cache(&self) -> Arc<CachePort> {
        Arc::clone(&self.cache)
    }
}
