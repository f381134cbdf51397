mod error;
mod service;

pub use error::TagServiceError;
pub use service::{Provisioning, TagService, UpdateTag};
