//! Ports - interfaces the domain expects infrastructure to implement.

mod repository;

pub use repository::{PostRepository, TagRepository, UserRepository};
