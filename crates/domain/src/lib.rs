//! Domain layer - Pure business logic with no external dependencies
//!
//! This crate contains:
//! - Entities (Tag, Item)
//! - Value Objects (TagId, TagUid, TagType, ItemId)
//! - The list query translator (raw query parameters -> TagQuery)
//! - Repository interfaces (traits)
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Business rules enforced at domain level
//! - Testable in isolation

pub mod error;
pub mod item;
pub mod query;
pub mod tag;

// Re-export commonly used types
pub use error::DomainError;
pub use item::{Item, ItemId, ItemInput};
pub use query::{Cursor, ListParams, SortDirection, SortField, SortKey, TagFilter, TagQuery};
pub use tag::{PopulatedTag, Tag, TagId, TagRepository, TagType, TagUid};
