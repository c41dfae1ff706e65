pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleListItem, Author, NewArticle};
pub use listing::{ArticleFilter, ArticlePage, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
pub use repository::{ArticleReadRepository, ArticleWriteRepository, AuthorRepository};
pub use value_objects::{ArticleBody, ArticleId, ArticleTitle, AuthorId};
