//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Slug is already in use.")]
    SlugTaken,

    #[error("Domain is already in use.")]
    DomainTaken,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Reserved key lookup error: {0}")]
    ReservedKeyLookupError(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
