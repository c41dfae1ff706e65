// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Blank or malformed input rejected by a value object.
    #[error("validation error: {0}")]
    Validation(String),
    /// A referenced row does not exist, e.g. an article pointing at a
    /// missing author.
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
