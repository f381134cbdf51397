use domain::DomainError;
use thiserror::Error;

/// Failures surfaced by [`super::TagService`], already classified for callers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TagServiceError {
    /// Malformed id, uid, query parameter or update body
    #[error("{0}")]
    Validation(String),

    #[error("Tag not found")]
    NotFound,

    /// A concurrent request provisioned the same uid first
    #[error("{0}")]
    Conflict(String),

    /// Persistence failure on a read or write path
    #[error("{0}")]
    Store(String),

    /// Persistence failure while deleting a tag that was just found
    #[error("Error removing tag")]
    RemoveFailed(String),
}

impl From<DomainError> for TagServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            e if e.is_validation() => Self::Validation(e.to_string()),
            DomainError::TagNotFound(_) => Self::NotFound,
            e @ DomainError::UidConflict(_) => Self::Conflict(e.to_string()),
            e => Self::Store(e.to_string()),
        }
    }
}
