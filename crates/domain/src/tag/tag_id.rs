use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Value object representing the store-assigned Tag identifier
///
/// Rules:
/// - Generated once when the tag is provisioned, never changes
/// - Must parse as a UUID when supplied by a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(Uuid);

impl TagId {
    /// Allocate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a client-supplied identifier
    pub fn parse(id: &str) -> Result<Self> {
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| DomainError::InvalidTagId(format!("'{id}' is not a valid tag id")))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for TagId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for TagId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(TagId::generate(), TagId::generate());
    }

    #[test]
    fn test_parse_round_trips_display() {
        let id = TagId::generate();
        let parsed = TagId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        let id = TagId::generate().to_string();
        assert!(TagId::parse(&format!(" {id}")).is_err());
        assert!(TagId::parse(&format!("{id}\n")).is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = TagId::parse("not-a-uuid");
        assert!(matches!(result, Err(DomainError::InvalidTagId(_))));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = TagId::parse("6f1c2a3e-8d7b-4b8e-9a61-3f0b6f1c2a3e").unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!("6f1c2a3e-8d7b-4b8e-9a61-3f0b6f1c2a3e"));
    }
}
