//! Data Transfer Objects - request/response types for the API.
//!
//! The three post responses deliberately carry different field sets:
//! the list omits `body`, the single fetch omits `author` and the
//! creation response omits `date`.

use blog_core::domain::{PostCreated, PostFull, PostSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Form-encoded request to create a post.
///
/// Fields are optional here so that a missing field reaches validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePostForm {
    /// Title of the post.
    pub title: Option<String>,
    /// Body of the post.
    pub body: Option<String>,
    /// Name of the author.
    pub author: Option<String>,
}

/// One entry of the post list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostSummaryResponse {
    pub id: i32,
    pub title: String,
    pub author: String,
    /// Creation time, RFC 3339.
    pub date: String,
}

impl From<PostSummary> for PostSummaryResponse {
    fn from(post: PostSummary) -> Self {
        Self {
            id: post.id,
            title: post.title,
            author: post.author,
            date: post.date.to_rfc3339(),
        }
    }
}

/// A single post as returned by the fetch endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub body: String,
    /// Creation time, RFC 3339.
    pub date: String,
}

impl From<PostFull> for PostResponse {
    fn from(post: PostFull) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            date: post.date.to_rfc3339(),
        }
    }
}

/// The post as stored by the creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostCreatedResponse {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub author: String,
}

impl From<PostCreated> for PostCreatedResponse {
    fn from(post: PostCreated) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            author: post.author,
        }
    }
}
