use serde::Deserialize;

use super::{Cursor, SortKey, TagFilter, TagQuery};
use crate::error::{DomainError, Result};
use crate::tag::TagType;

pub const DEFAULT_LIMIT: u64 = 30;
pub const MAX_LIMIT: u64 = 100;

/// Query-string values exactly as received.
///
/// Kept as strings so that malformed numbers surface as
/// [`DomainError::InvalidQuery`] instead of a transport-level rejection.
/// Parameters not listed here are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
    #[serde(rename = "type")]
    pub tag_type: Option<String>,
}

impl ListParams {
    pub fn translate(&self) -> Result<TagQuery> {
        let skip = parse_bounded("skip", self.skip.as_deref(), 0, 0, None)?;
        let limit = parse_bounded(
            "limit",
            self.limit.as_deref(),
            DEFAULT_LIMIT,
            1,
            Some(MAX_LIMIT),
        )?;
        let sort = parse_sort(self.sort.as_deref())?;

        let tag_type = match non_empty(self.tag_type.as_deref()) {
            Some(raw) => Some(
                raw.parse::<TagType>()
                    .map_err(|e| DomainError::InvalidQuery(format!("type: {e}")))?,
            ),
            None => None,
        };

        Ok(TagQuery {
            filter: TagFilter { tag_type },
            cursor: Cursor {
                skip,
                limit: Some(limit),
                sort,
            },
        })
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_bounded(
    name: &str,
    raw: Option<&str>,
    default: u64,
    min: i64,
    max: Option<u64>,
) -> Result<u64> {
    let Some(raw) = non_empty(raw) else {
        return Ok(default);
    };

    let value: i64 = raw
        .parse()
        .map_err(|_| DomainError::InvalidQuery(format!("{name}: '{raw}' is not an integer")))?;

    if value < min {
        return Err(DomainError::InvalidQuery(format!(
            "{name}: must be greater than or equal to {min}"
        )));
    }

    let value = value as u64;
    if let Some(max) = max {
        if value > max {
            return Err(DomainError::InvalidQuery(format!(
                "{name}: must be less than or equal to {max}"
            )));
        }
    }

    Ok(value)
}

fn parse_sort(raw: Option<&str>) -> Result<Vec<SortKey>> {
    let Some(raw) = non_empty(raw) else {
        return Ok(Vec::new());
    };

    let mut keys: Vec<SortKey> = Vec::new();
    for segment in raw.split(',').map(str::trim) {
        if segment.is_empty() {
            return Err(DomainError::InvalidQuery(
                "sort: empty field in list".to_string(),
            ));
        }
        let key: SortKey = segment.parse()?;
        if keys.iter().any(|k| k.field == key.field) {
            return Err(DomainError::InvalidQuery(format!(
                "sort: field '{}' listed twice",
                key.field.as_str()
            )));
        }
        keys.push(key);
    }

    Ok(keys)
}
