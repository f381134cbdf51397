use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What a physical tag is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    /// Freshly provisioned, not yet classified
    #[default]
    Unknown,
    /// Bound to a warehouse item
    Item,
    /// Switches the reader into an operating mode
    Mode,
}

impl TagType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Item => "item",
            Self::Mode => "mode",
        }
    }
}

impl FromStr for TagType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(Self::Unknown),
            "item" => Ok(Self::Item),
            "mode" => Ok(Self::Mode),
            other => Err(DomainError::InvalidTagType(format!(
                "'{other}' is not one of unknown, item, mode"
            ))),
        }
    }
}

impl std::fmt::Display for TagType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
