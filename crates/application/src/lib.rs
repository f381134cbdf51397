//! Application layer - Use cases and business workflows

pub mod tag;

pub use tag::{Provisioning, TagService, TagServiceError, UpdateTag};
