use serde::{Deserialize, Serialize};

use super::ItemId;

/// An inventory item as seen by the tag registry.
/// Items are managed elsewhere; tags only point at them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description,
        }
    }
}
