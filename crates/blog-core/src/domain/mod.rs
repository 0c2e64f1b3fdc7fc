//! Domain entities - the post projections exchanged with storage.

mod post;

pub use post::{NewPost, PostCreated, PostFull, PostId, PostSummary};
