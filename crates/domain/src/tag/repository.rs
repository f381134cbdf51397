use crate::{DomainError, PopulatedTag, Tag, TagId, TagQuery, TagUid};
use async_trait::async_trait;

/// Repository interface for Tag persistence
///
/// This trait defines the contract for tag storage and retrieval.
/// Implementations should be provided in the infrastructure layer.
/// Every method is atomic for a single tag; nothing spans several rows.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Tags matching the query's filter, ordered and windowed by its cursor
    async fn find_many(&self, query: &TagQuery) -> Result<Vec<Tag>, DomainError>;

    /// Find tag by ID
    async fn find_by_id(&self, id: &TagId) -> Result<Option<Tag>, DomainError>;

    /// Find tag by its external uid
    async fn find_by_uid(&self, uid: &TagUid) -> Result<Option<Tag>, DomainError>;

    /// Insert a new tag.
    /// Fails with [`DomainError::UidConflict`] when the uid is already taken.
    async fn create(&self, tag: &Tag) -> Result<Tag, DomainError>;

    /// Replace the mutable fields of an existing tag
    async fn save(&self, tag: &Tag) -> Result<Tag, DomainError>;

    /// Delete the tag, returning what was removed
    async fn remove(&self, tag: &Tag) -> Result<Tag, DomainError>;

    /// Resolve the tag's item reference
    async fn populate_item(&self, tag: Tag) -> Result<PopulatedTag, DomainError>;
}
