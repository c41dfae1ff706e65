// tests/support/mocks/article_store.rs
use article_api::domain::article::{
    Article, ArticleFilter, ArticleListItem, ArticlePage, ArticleReadRepository,
    ArticleWriteRepository, Author, AuthorId, AuthorRepository, NewArticle,
};
use article_api::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct StoreState {
    authors: Vec<Author>,
    articles: Vec<Article>,
}

/// Mirrors the Postgres repositories: case-insensitive substring filters,
/// newest-first ordering with id as tie-break, and a foreign key from
/// articles to authors.
#[derive(Clone, Default)]
pub struct InMemoryArticleStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_authors(authors: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (id, name) in authors {
            store.add_author(id, name);
        }
        store
    }

    pub fn add_author(&self, id: &str, name: &str) {
        self.state.lock().unwrap().authors.push(Author {
            id: AuthorId::new(id).unwrap(),
            name: name.to_string(),
        });
    }

    pub fn remove_author(&self, id: &str) {
        self.state
            .lock()
            .unwrap()
            .authors
            .retain(|author| author.id.as_str() != id);
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    fn author_of(state: &StoreState, id: &AuthorId) -> Option<Author> {
        state.authors.iter().find(|author| &author.id == id).cloned()
    }

    fn matching(&self, filter: &ArticleFilter) -> Vec<ArticleListItem> {
        let state = self.state.lock().unwrap();
        let search = filter.search().map(str::to_lowercase);
        let author_name = filter.author_name().map(str::to_lowercase);

        let mut items: Vec<ArticleListItem> = state
            .articles
            .iter()
            .filter_map(|article| {
                let author = Self::author_of(&state, &article.author_id);
                if let Some(needle) = &search {
                    let hit = article.title.as_str().to_lowercase().contains(needle)
                        || article.body.as_str().to_lowercase().contains(needle);
                    if !hit {
                        return None;
                    }
                }
                if let Some(needle) = &author_name {
                    let hit = author
                        .as_ref()
                        .is_some_and(|author| author.name.to_lowercase().contains(needle));
                    if !hit {
                        return None;
                    }
                }
                Some(ArticleListItem {
                    id: article.id.clone(),
                    author_id: article.author_id.clone(),
                    title: article.title.clone(),
                    created_at: article.created_at,
                    author,
                })
            })
            .collect();

        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.as_str().cmp(a.id.as_str()))
        });
        items
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if Self::author_of(&state, &article.author_id).is_none() {
            return Err(DomainError::NotFound(format!(
                "author {} referenced by article",
                article.author_id
            )));
        }
        if state.articles.iter().any(|existing| existing.id == article.id) {
            return Err(DomainError::Persistence(format!(
                "duplicate article id {}",
                article.id
            )));
        }

        let stored = Article {
            id: article.id,
            author_id: article.author_id,
            title: article.title,
            body: article.body,
            created_at: article.created_at,
            author: None,
        };
        state.articles.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        Ok(self.matching(filter).len() as u64)
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: ArticlePage,
    ) -> DomainResult<Vec<ArticleListItem>> {
        Ok(self
            .matching(filter)
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }
}

#[async_trait]
impl AuthorRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: &AuthorId) -> DomainResult<Option<Author>> {
        let state = self.state.lock().unwrap();
        Ok(Self::author_of(&state, id))
    }
}

/// Read side that always fails, for the 500 path.
#[derive(Clone, Default)]
pub struct FailingArticleReads;

#[async_trait]
impl ArticleReadRepository for FailingArticleReads {
    async fn count(&self, _filter: &ArticleFilter) -> DomainResult<u64> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn list_page(
        &self,
        _filter: &ArticleFilter,
        _page: ArticlePage,
    ) -> DomainResult<Vec<ArticleListItem>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

/// Answers the first lookup from the store, then deletes that author, as if
/// another client removed it before the insert ran.
pub struct AuthorRemovedAfterLookup {
    store: InMemoryArticleStore,
}

impl AuthorRemovedAfterLookup {
    pub fn new(store: InMemoryArticleStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthorRepository for AuthorRemovedAfterLookup {
    async fn find_by_id(&self, id: &AuthorId) -> DomainResult<Option<Author>> {
        let found = self.store.find_by_id(id).await?;
        self.store.remove_author(id.as_str());
        Ok(found)
    }
}

/// Finds authors for the first `visible_lookups` calls and nothing after,
/// while the store itself keeps them so inserts still succeed.
pub struct AuthorsVanishAfter {
    store: InMemoryArticleStore,
    visible_lookups: usize,
    lookups: AtomicUsize,
}

impl AuthorsVanishAfter {
    pub fn new(store: InMemoryArticleStore, visible_lookups: usize) -> Self {
        Self {
            store,
            visible_lookups,
            lookups: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AuthorRepository for AuthorsVanishAfter {
    async fn find_by_id(&self, id: &AuthorId) -> DomainResult<Option<Author>> {
        let seen = self.lookups.fetch_add(1, Ordering::SeqCst);
        if seen < self.visible_lookups {
            self.store.find_by_id(id).await
        } else {
            Ok(None)
        }
    }
}
