use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Reference to an Item owned by the inventory side of the system
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(DomainError::InvalidItemRef(
                "item id cannot be empty".to_string(),
            ));
        }

        let len = id.chars().count();
        if len > 255 {
            return Err(DomainError::InvalidItemRef(format!(
                "item id too long: {len} chars (max 255)"
            )));
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_item_id() {
        assert_eq!(ItemId::new("ITEM1").unwrap().as_str(), "ITEM1");
    }

    #[test]
    fn test_blank_item_id() {
        assert!(ItemId::new("").is_err());
        assert!(ItemId::new("   ").is_err());
    }

    #[test]
    fn test_length_limit_counts_chars() {
        // 255 two-byte chars is 510 bytes but still within the limit
        assert!(ItemId::new("é".repeat(255)).is_ok());
        assert!(ItemId::new("é".repeat(256)).is_err());
    }
}
