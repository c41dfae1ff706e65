pub mod articles;

pub use articles::{ArticleDto, ArticleListItemDto, AuthorDto, ListArticlesResult};
