// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Errors surfaced to the transport layer. Cache failures never show up
/// here; they are logged where they happen.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("author not found: {0}")]
    AuthorNotFound(String),

    #[error("store failure: {0}")]
    Store(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn author_not_found(id: impl Into<String>) -> Self {
        Self::AuthorNotFound(id.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            // A dangling reference only has a typed meaning at the call site
            // that knows which row was referenced.
            DomainError::NotFound(msg) | DomainError::Persistence(msg) => Self::Store(msg),
        }
    }
}
