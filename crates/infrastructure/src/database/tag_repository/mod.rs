mod sea_orm_tag_repository;

pub use sea_orm_tag_repository::SeaOrmTagRepository;
