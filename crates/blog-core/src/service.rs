//! Post service - the request-handling rules, independent of any HTTP layer.

use std::sync::Arc;

use crate::domain::{NewPost, PostCreated, PostFull, PostId, PostSummary};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Maps plain request inputs to repository calls and typed outcomes.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// List every post without its body.
    pub async fn list_posts(&self) -> Result<Vec<PostSummary>, DomainError> {
        Ok(self.repo.list_summaries().await?)
    }

    /// Fetch one post. A missing row is reported as `NotFound`.
    pub async fn get_post(&self, id: PostId) -> Result<PostFull, DomainError> {
        self.repo
            .find_full(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "post",
                id,
            })
    }

    /// Validate and store a new post. Nothing is written when validation fails.
    pub async fn create_post(
        &self,
        title: Option<String>,
        body: Option<String>,
        author: Option<String>,
    ) -> Result<PostCreated, DomainError> {
        let post = NewPost::new(title, body, author)?;
        Ok(self.repo.insert(post).await?)
    }

    /// Check that storage answers.
    pub async fn storage_ready(&self) -> Result<(), DomainError> {
        Ok(self.repo.ping().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::error::RepoError;

    #[derive(Default)]
    struct FakeRepository {
        rows: Mutex<Vec<(PostId, NewPost)>>,
        offline: bool,
    }

    impl FakeRepository {
        fn offline() -> Self {
            Self {
                offline: true,
                ..Self::default()
            }
        }

        fn check(&self) -> Result<(), RepoError> {
            if self.offline {
                return Err(RepoError::Connection("unreachable".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PostRepository for FakeRepository {
        async fn list_summaries(&self) -> Result<Vec<PostSummary>, RepoError> {
            self.check()?;
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .map(|(id, p)| PostSummary {
                    id: *id,
                    title: p.title.clone(),
                    author: p.author.clone(),
                    date: Utc::now(),
                })
                .collect())
        }

        async fn find_full(&self, id: PostId) -> Result<Option<PostFull>, RepoError> {
            self.check()?;
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|(row_id, _)| *row_id == id).map(|(id, p)| PostFull {
                id: *id,
                title: p.title.clone(),
                body: p.body.clone(),
                date: Utc::now(),
            }))
        }

        async fn insert(&self, post: NewPost) -> Result<PostCreated, RepoError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as PostId + 1;
            rows.push((id, post.clone()));
            Ok(PostCreated::from_insert(id, post))
        }

        async fn ping(&self) -> Result<(), RepoError> {
            self.check()
        }
    }

    fn text(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[tokio::test]
    async fn create_then_get_returns_same_title_and_body() {
        let service = PostService::new(Arc::new(FakeRepository::default()));

        let created = service
            .create_post(text("Hello"), text("World body"), text("Ana"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = service.get_post(created.id).await.unwrap();
        assert_eq!(fetched.title, "Hello");
        assert_eq!(fetched.body, "World body");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let service = PostService::new(Arc::new(FakeRepository::default()));

        let err = service.get_post(999).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { id: 999, .. }));
    }

    #[tokio::test]
    async fn invalid_input_writes_nothing() {
        let service = PostService::new(Arc::new(FakeRepository::default()));

        let err = service
            .create_post(text("Hello"), None, text("Ana"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "body" }));
        assert!(service.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn repository_failures_surface_as_storage_errors() {
        let service = PostService::new(Arc::new(FakeRepository::offline()));

        assert!(matches!(
            service.list_posts().await,
            Err(DomainError::Storage(_))
        ));
        assert!(matches!(
            service.storage_ready().await,
            Err(DomainError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn validation_runs_before_storage() {
        let service = PostService::new(Arc::new(FakeRepository::offline()));

        let err = service
            .create_post(text(""), text("body"), text("Ana"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "title" }));
    }
}
