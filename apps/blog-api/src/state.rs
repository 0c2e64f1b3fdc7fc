//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostService;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, SqlPostRepository, Storage, ensure_schema};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Prepare storage and the post service.
    ///
    /// Fails when the database cannot be reached or the schema cannot be
    /// created; the server must not start in that case.
    pub async fn new(db_config: &DatabaseConfig) -> Result<Self, RepoError> {
        let storage = Storage::init(db_config).await?;
        ensure_schema(&storage).await?;

        let repo = Arc::new(SqlPostRepository::new(storage));

        tracing::info!("Application state initialized");
        Ok(Self::from_repository(repo))
    }

    pub fn from_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(repo),
        }
    }
}
