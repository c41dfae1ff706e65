use super::ArticleQueryService;
use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::AuthorId,
};

pub struct GetAuthorQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_author_by_id(&self, query: GetAuthorQuery) -> ApplicationResult<AuthorDto> {
        let Ok(id) = AuthorId::new(query.id.clone()) else {
            return Err(ApplicationError::author_not_found(query.id));
        };

        self.author_repo
            .find_by_id(&id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::author_not_found(id))
    }
}
