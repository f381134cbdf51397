use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TagId, TagType, TagUid};
use crate::item::{Item, ItemId};

/// Tag aggregate root - main entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    id: TagId,
    uid: Option<TagUid>,
    #[serde(rename = "type")]
    tag_type: TagType,
    item: Option<ItemId>,

    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Tag {
    /// Create a new, unclassified tag with a fresh id
    pub fn new() -> Self {
        let now = Utc::now();

        Self {
            id: TagId::generate(),
            uid: None,
            tag_type: TagType::default(),
            item: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Tag auto-provisioned on the first lookup of an unknown uid
    pub fn provision(uid: TagUid) -> Self {
        Self {
            uid: Some(uid),
            ..Self::new()
        }
    }

    /// Rebuild a tag from persisted state
    pub fn restore(
        id: TagId,
        uid: Option<TagUid>,
        tag_type: TagType,
        item: Option<ItemId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            uid,
            tag_type,
            item,
            created_at,
            updated_at,
        }
    }

    // Getters
    pub fn id(&self) -> &TagId {
        &self.id
    }

    pub fn uid(&self) -> Option<&TagUid> {
        self.uid.as_ref()
    }

    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    pub fn item(&self) -> Option<&ItemId> {
        self.item.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutations
    pub fn set_type(&mut self, tag_type: TagType) {
        self.tag_type = tag_type;
        self.touch();
    }

    pub fn assign_item(&mut self, item: Option<ItemId>) {
        self.item = item;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self::new()
    }
}

/// A tag whose `item` reference has been resolved against the item store.
///
/// `item` is `None` both when the tag has no reference and when the
/// reference points at an item that no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedTag {
    id: TagId,
    uid: Option<TagUid>,
    #[serde(rename = "type")]
    tag_type: TagType,
    item: Option<Item>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PopulatedTag {
    pub fn new(tag: Tag, item: Option<Item>) -> Self {
        Self {
            id: tag.id,
            uid: tag.uid,
            tag_type: tag.tag_type,
            item,
            created_at: tag.created_at,
            updated_at: tag.updated_at,
        }
    }

    pub fn id(&self) -> &TagId {
        &self.id
    }

    pub fn uid(&self) -> Option<&TagUid> {
        self.uid.as_ref()
    }

    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }
}
