use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Store-assigned post identifier.
pub type PostId = i32;

/// List-view projection of a post. The body is never loaded for list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

/// Single-fetch projection of a post. Carries the body but not the author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFull {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
}

/// Creation-response projection: the submitted fields plus the assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCreated {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub author: String,
}

impl PostCreated {
    /// Combine the validated input with the id the store assigned to it.
    pub fn from_insert(id: PostId, post: NewPost) -> Self {
        Self {
            id,
            title: post.title,
            body: post.body,
            author: post.author,
        }
    }
}

/// Validated input for a new post. Every field is present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub author: String,
}

impl NewPost {
    /// Validate raw creation input.
    ///
    /// Fields are checked in `title`, `body`, `author` order and the first
    /// missing or empty one is reported.
    pub fn new(
        title: Option<String>,
        body: Option<String>,
        author: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            title: required("title", title)?,
            body: required("body", body)?,
            author: required("author", author)?,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::Validation { field }),
    }
}
