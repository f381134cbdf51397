mod entity;
mod input;
mod item_id;

pub use entity::Item;
pub use input::{ExpandedItem, ItemInput};
pub use item_id::ItemId;
