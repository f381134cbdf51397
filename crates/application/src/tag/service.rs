use std::sync::Arc;

use domain::{
    DomainError, ItemId, ItemInput, PopulatedTag, Tag, TagId, TagQuery, TagRepository, TagType,
    TagUid,
};
use tracing::{debug, error, info};

use super::TagServiceError;

type Result<T> = std::result::Result<T, TagServiceError>;

/// Whether [`TagService::get_or_create`] found the tag or provisioned it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioning {
    Existing,
    Created,
}

/// Validated update: `type` already parsed and `item` already collapsed to an id
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTag {
    pub tag_type: TagType,
    pub item: Option<ItemId>,
}

impl UpdateTag {
    pub fn new(tag_type: TagType, item: Option<ItemId>) -> Self {
        Self { tag_type, item }
    }

    /// Build from the raw request body. `None` for `item` clears the reference.
    pub fn from_raw(
        tag_type: &str,
        item: Option<ItemInput>,
    ) -> std::result::Result<Self, DomainError> {
        let tag_type = tag_type.parse::<TagType>()?;
        let item = item.map(ItemInput::resolve).transpose()?;
        Ok(Self { tag_type, item })
    }
}

/// Tag use cases: list, get, get-or-create by uid, update, delete.
///
/// Holds no state besides the repository; every call is independent.
#[derive(Clone)]
pub struct TagService {
    repo: Arc<dyn TagRepository>,
}

impl TagService {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, query: &TagQuery) -> Result<Vec<Tag>> {
        let tags = self.repo.find_many(query).await?;
        debug!(count = tags.len(), skip = query.cursor.skip, "listed tags");
        Ok(tags)
    }

    pub async fn get(&self, id: &TagId) -> Result<Tag> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(TagServiceError::NotFound)
    }

    /// Looks the uid up and provisions a fresh `unknown` tag when nothing matches.
    ///
    /// This is a read that may write. Two concurrent calls for the same unseen
    /// uid race on insert; the loser gets [`TagServiceError::Conflict`] from the
    /// store's unique index.
    pub async fn get_or_create(&self, uid: &TagUid) -> Result<(Tag, Provisioning)> {
        if let Some(tag) = self.repo.find_by_uid(uid).await? {
            return Ok((tag, Provisioning::Existing));
        }

        let tag = self.repo.create(&Tag::provision(uid.clone())).await?;
        info!(tag_id = %tag.id(), uid = %uid, "create tag");

        Ok((tag, Provisioning::Created))
    }

    pub async fn update(&self, id: &TagId, update: UpdateTag) -> Result<PopulatedTag> {
        let mut tag = self.get(id).await?;

        tag.set_type(update.tag_type);
        tag.assign_item(update.item);

        let tag = self.repo.save(&tag).await?;
        info!(
            tag_id = %tag.id(),
            tag_type = %tag.tag_type(),
            item = ?tag.item().map(ItemId::as_str),
            "update tag"
        );

        Ok(self.repo.populate_item(tag).await?)
    }

    pub async fn delete(&self, id: &TagId) -> Result<()> {
        let tag = self.get(id).await?;

        let removed = self.repo.remove(&tag).await.map_err(|e| match e {
            DomainError::TagNotFound(_) => TagServiceError::NotFound,
            e => {
                error!(tag_id = %tag.id(), error = %e, "failed to remove tag");
                TagServiceError::RemoveFailed(e.to_string())
            }
        })?;
        info!(tag_id = %removed.id(), uid = ?removed.uid().map(TagUid::as_str), "delete tag");

        Ok(())
    }
}
