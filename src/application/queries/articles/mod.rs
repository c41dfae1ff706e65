mod authors;
mod list;
mod service;

pub use authors::GetAuthorQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
