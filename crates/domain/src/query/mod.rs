//! List query translation.
//!
//! Raw query-string values come in as [`ListParams`]; [`ListParams::translate`]
//! validates and bounds them into a [`TagQuery`] that repositories execute
//! verbatim. Nothing here touches the store.

mod cursor;
mod params;

pub use cursor::{Cursor, SortDirection, SortField, SortKey};
pub use params::{DEFAULT_LIMIT, ListParams, MAX_LIMIT};

use crate::tag::TagType;

/// Which tags a list request selects. The default matches every tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    pub tag_type: Option<TagType>,
}

impl TagFilter {
    pub fn is_empty(&self) -> bool {
        self.tag_type.is_none()
    }
}

/// Validated list request: filter plus pagination/sort cursor.
/// Projection is always the full document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagQuery {
    pub filter: TagFilter,
    pub cursor: Cursor,
}
