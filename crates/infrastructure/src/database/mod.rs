mod connection;
pub mod tag_repository;

pub mod entities;

pub use connection::connect;
pub use tag_repository::SeaOrmTagRepository;
