//! Database connection management and repositories.

mod connections;
pub mod entity;
pub mod repos;

pub use connections::DatabaseConfig;
pub use sea_orm::DbConn;
pub use repos::{SeaOrmPostRepository, SeaOrmTagRepository, SeaOrmUserRepository};

#[cfg(test)]
mod tests;
