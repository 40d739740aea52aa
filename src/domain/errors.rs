// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("empty value: {0}")]
    EmptyValue(String),
    #[error("cannot allocate a slug for an empty candidate")]
    EmptyCandidate,
    #[error("no unique slug fits into {max_length} characters")]
    LengthExhausted { max_length: usize },
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
