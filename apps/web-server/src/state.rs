//! Application state - shared across all handlers.

use std::sync::Arc;

use blogly_core::ports::{PostRepository, TagRepository, UserRepository};
use blogly_infra::database::{
    DbConn, SeaOrmPostRepository, SeaOrmTagRepository, SeaOrmUserRepository,
};

use crate::templates::Templates;

/// Shared application state: one repository per resource plus the
/// compiled template set.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub templates: Arc<Templates>,
}

impl AppState {
    /// Build the application state over an open database connection.
    pub fn new(db: DbConn) -> anyhow::Result<Self> {
        let templates = Arc::new(Templates::new()?);

        Ok(Self {
            users: Arc::new(SeaOrmUserRepository::new(db.clone())),
            posts: Arc::new(SeaOrmPostRepository::new(db.clone())),
            tags: Arc::new(SeaOrmTagRepository::new(db)),
            templates,
        })
    }
}
