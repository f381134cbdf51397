use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

const MAX_UID_LEN: usize = 255;

/// Externally assigned tag identifier (e.g. an RFID/NFC chip serial)
///
/// Rules:
/// - Must be non-empty
/// - Max length 255 characters
/// - No control characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagUid(String);

impl TagUid {
    pub fn new(uid: impl Into<String>) -> Result<Self> {
        let uid = uid.into();

        if uid.is_empty() {
            return Err(DomainError::InvalidUid("uid cannot be empty".to_string()));
        }

        if uid.chars().count() > MAX_UID_LEN {
            return Err(DomainError::InvalidUid(format!(
                "uid too long: {} chars (max {MAX_UID_LEN})",
                uid.chars().count()
            )));
        }

        if uid.chars().any(char::is_control) {
            return Err(DomainError::InvalidUid(
                "uid must not contain control characters".to_string(),
            ));
        }

        Ok(Self(uid))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TagUid {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TagUid> for String {
    fn from(uid: TagUid) -> Self {
        uid.0
    }
}

impl std::fmt::Display for TagUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
