// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_author;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_author::PostgresAuthorRepository;
