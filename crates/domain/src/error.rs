use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid tag ID: {0}")]
    InvalidTagId(String),

    #[error("Invalid tag uid: {0}")]
    InvalidUid(String),

    #[error("Invalid tag type: {0}")]
    InvalidTagType(String),

    #[error("Invalid item reference: {0}")]
    InvalidItemRef(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Tag uid already in use: {0}")]
    UidConflict(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl DomainError {
    /// True for errors caused by malformed client input rather than by the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidTagId(_)
                | Self::InvalidUid(_)
                | Self::InvalidTagType(_)
                | Self::InvalidItemRef(_)
                | Self::InvalidQuery(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
