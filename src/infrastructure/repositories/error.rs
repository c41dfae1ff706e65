use crate::domain::errors::DomainError;

const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_ARTICLE_PKEY: &str = "articles_pkey";
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_ARTICLE_PKEY => {
                        DomainError::Persistence("article id already exists".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                return DomainError::NotFound("referenced record not found".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// A stored row that fails value-object checks is a store fault, never
/// caller input.
pub(crate) fn map_row_decode(err: DomainError) -> DomainError {
    match err {
        DomainError::Validation(msg) => DomainError::Persistence(format!("invalid stored row: {msg}")),
        other => other,
    }
}
