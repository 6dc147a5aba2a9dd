//! # Blogly Infra
//!
//! Infrastructure layer: SeaORM entities and repository implementations
//! backing the ports declared in `blogly-core`.

pub mod database;
