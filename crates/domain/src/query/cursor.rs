use std::str::FromStr;

use crate::error::DomainError;

/// Pagination and ordering for a list request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    pub skip: u64,
    /// `None` returns everything after `skip`
    pub limit: Option<u64>,
    /// Empty keeps the store's natural order
    pub sort: Vec<SortKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Uid,
    Type,
    Item,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Uid => "uid",
            Self::Type => "type",
            Self::Item => "item",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" | "_id" => Ok(Self::Id),
            "uid" => Ok(Self::Uid),
            "type" => Ok(Self::Type),
            "item" => Ok(Self::Item),
            "createdAt" => Ok(Self::CreatedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            other => Err(DomainError::InvalidQuery(format!(
                "sort: unknown field '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    /// `uid`, `+uid` and `-uid`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(field) = s.strip_prefix('-') {
            Ok(Self::desc(field.parse()?))
        } else if let Some(field) = s.strip_prefix('+') {
            Ok(Self::asc(field.parse()?))
        } else {
            Ok(Self::asc(s.parse()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_prefixes() {
        assert_eq!("uid".parse::<SortKey>().unwrap(), SortKey::asc(SortField::Uid));
        assert_eq!("+uid".parse::<SortKey>().unwrap(), SortKey::asc(SortField::Uid));
        assert_eq!(
            "-createdAt".parse::<SortKey>().unwrap(),
            SortKey::desc(SortField::CreatedAt)
        );
    }

    #[test]
    fn test_mongo_style_id_alias() {
        assert_eq!("_id".parse::<SortField>().unwrap(), SortField::Id);
    }

    #[test]
    fn test_unknown_sort_field() {
        assert!(matches!(
            "-password".parse::<SortKey>(),
            Err(DomainError::InvalidQuery(_))
        ));
    }
}
