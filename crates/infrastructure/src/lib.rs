//! Infrastructure layer - External integrations

pub mod config;
pub mod database;

pub use config::{AuthConfig, DatabaseConfig, HttpConfig, ServerConfig};
pub use database::{SeaOrmTagRepository, connect};
