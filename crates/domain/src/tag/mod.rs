mod aggregate;
mod repository;
mod tag_id;
mod tag_type;
mod uid;

pub use aggregate::{PopulatedTag, Tag};
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockTagRepository;
pub use repository::TagRepository;
pub use tag_id::TagId;
pub use tag_type::TagType;
pub use uid::TagUid;
