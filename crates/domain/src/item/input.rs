use serde::Deserialize;

use super::ItemId;
use crate::error::{DomainError, Result};

/// `item` as submitted by clients.
///
/// Clients send either the bare item id or the item object they got back from
/// an earlier read. Both collapse into one [`ItemId`] via [`ItemInput::resolve`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ItemInput {
    RawId(String),
    Expanded(ExpandedItem),
}

/// Object form of an item reference. Extra fields (name, description...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExpandedItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub legacy_id: Option<String>,
}

impl ItemInput {
    /// `id` wins over `_id`; an empty `id` falls through to `_id`.
    pub fn resolve(self) -> Result<ItemId> {
        match self {
            Self::RawId(id) => ItemId::new(id),
            Self::Expanded(expanded) => {
                let id = expanded
                    .id
                    .filter(|id| !id.is_empty())
                    .or(expanded.legacy_id)
                    .ok_or_else(|| {
                        DomainError::InvalidItemRef(
                            "item object must carry an 'id' or '_id' field".to_string(),
                        )
                    })?;
                ItemId::new(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve(value: serde_json::Value) -> Result<ItemId> {
        serde_json::from_value::<ItemInput>(value).unwrap().resolve()
    }

    #[test]
    fn test_all_shapes_resolve_to_same_id() {
        let expected = ItemId::new("X").unwrap();
        assert_eq!(resolve(json!("X")).unwrap(), expected);
        assert_eq!(resolve(json!({"id": "X"})).unwrap(), expected);
        assert_eq!(resolve(json!({"_id": "X"})).unwrap(), expected);
    }

    #[test]
    fn test_id_preferred_over_legacy_id() {
        let id = resolve(json!({"id": "A", "_id": "B"})).unwrap();
        assert_eq!(id.as_str(), "A");
    }

    #[test]
    fn test_empty_id_falls_back_to_legacy_id() {
        let id = resolve(json!({"id": "", "_id": "B"})).unwrap();
        assert_eq!(id.as_str(), "B");
    }

    #[test]
    fn test_populated_representation_is_accepted() {
        let id = resolve(json!({"id": "ITEM1", "name": "Pallet jack", "description": null}))
            .unwrap();
        assert_eq!(id.as_str(), "ITEM1");
    }

    #[test]
    fn test_object_without_id_is_rejected() {
        let result = resolve(json!({"name": "nameless"}));
        assert!(matches!(result, Err(DomainError::InvalidItemRef(_))));
    }

    #[test]
    fn test_non_string_id_fails_to_deserialize() {
        assert!(serde_json::from_value::<ItemInput>(json!(42)).is_err());
    }
}
