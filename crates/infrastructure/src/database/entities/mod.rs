pub mod items;
pub mod tags;
