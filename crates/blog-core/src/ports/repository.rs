use async_trait::async_trait;

use crate::domain::{NewPost, PostCreated, PostFull, PostId, PostSummary};
use crate::error::RepoError;

/// Post repository. Every method runs exactly one statement against storage.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Load the list projection of every stored post, in store order.
    async fn list_summaries(&self) -> Result<Vec<PostSummary>, RepoError>;

    /// Load the single-fetch projection of one post.
    async fn find_full(&self, id: PostId) -> Result<Option<PostFull>, RepoError>;

    /// Insert a post, letting the store assign its id and date.
    async fn insert(&self, post: NewPost) -> Result<PostCreated, RepoError>;

    /// Check that storage is reachable.
    async fn ping(&self) -> Result<(), RepoError>;
}
