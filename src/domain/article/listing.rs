// src/domain/article/listing.rs
//
// Filter and offset pagination used by the article listing.

pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Optional filters; blank strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    search: Option<String>,
    author_name: Option<String>,
}

impl ArticleFilter {
    pub fn new(search: Option<String>, author_name: Option<String>) -> Self {
        Self {
            search: non_blank(search),
            author_name: non_blank(author_name),
        }
    }

    /// Case-insensitive substring matched against title or body.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Case-insensitive substring matched against the joined author's name.
    pub fn author_name(&self) -> Option<&str> {
        self.author_name.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.author_name.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A normalised 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticlePage {
    page: u32,
    limit: u32,
}

impl ArticlePage {
    /// Coerces raw caller input: `page` to at least 1, `limit` to `[1, 100]`
    /// with 10 used for unset or non-positive values.
    pub fn normalize(page: i64, limit: i64) -> Self {
        let page = if page <= 0 {
            1
        } else {
            u32::try_from(page).unwrap_or(u32::MAX)
        };

        let limit = if limit <= 0 {
            DEFAULT_PAGE_LIMIT
        } else {
            u32::try_from(limit)
                .unwrap_or(MAX_PAGE_LIMIT)
                .min(MAX_PAGE_LIMIT)
        };

        Self { page, limit }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }
}

impl Default for ArticlePage {
    fn default() -> Self {
        Self::normalize(1, i64::from(DEFAULT_PAGE_LIMIT))
    }
}
