//! SQL post repository.

use async_trait::async_trait;
use sea_orm::{EntityTrait, QuerySelect, Select, Set};

use blog_core::domain::{NewPost, PostCreated, PostFull, PostId, PostSummary};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::connections::{Storage, repo_error};
use super::entity::post::{self, Entity as PostEntity, FullRow, SummaryRow};

/// Post repository over any SeaORM backend.
///
/// Each call acquires a connection from [`Storage`], runs a single
/// statement and releases the connection before returning.
pub struct SqlPostRepository {
    storage: Storage,
}

impl SqlPostRepository {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}

/// `SELECT id, title, author, date FROM posts`
pub(crate) fn summary_select() -> Select<PostEntity> {
    PostEntity::find().select_only().columns([
        post::Column::Id,
        post::Column::Title,
        post::Column::Author,
        post::Column::Date,
    ])
}

/// `SELECT id, title, body, date FROM posts WHERE id = ?`
pub(crate) fn full_select(id: PostId) -> Select<PostEntity> {
    PostEntity::find_by_id(id).select_only().columns([
        post::Column::Id,
        post::Column::Title,
        post::Column::Body,
        post::Column::Date,
    ])
}

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn list_summaries(&self) -> Result<Vec<PostSummary>, RepoError> {
        tracing::debug!("Listing posts");

        let lease = self.storage.acquire().await?;
        let result = summary_select()
            .into_model::<SummaryRow>()
            .all(lease.conn())
            .await;
        lease.release().await;

        let rows = result.map_err(repo_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_full(&self, id: PostId) -> Result<Option<PostFull>, RepoError> {
        tracing::debug!(post_id = id, "Fetching post");

        let lease = self.storage.acquire().await?;
        let result = full_select(id)
            .into_model::<FullRow>()
            .one(lease.conn())
            .await;
        lease.release().await;

        Ok(result.map_err(repo_error)?.map(Into::into))
    }

    async fn insert(&self, post: NewPost) -> Result<PostCreated, RepoError> {
        // `id` and `date` stay unset so the column defaults apply.
        let row = post::ActiveModel {
            title: Set(post.title.clone()),
            body: Set(post.body.clone()),
            author: Set(post.author.clone()),
            ..Default::default()
        };

        let lease = self.storage.acquire().await?;
        let result = PostEntity::insert(row).exec(lease.conn()).await;
        lease.release().await;

        let id = result.map_err(repo_error)?.last_insert_id;
        tracing::debug!(post_id = id, "Post inserted");
        Ok(PostCreated::from_insert(id, post))
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.storage.ping().await
    }
}
