//! Database connection management, schema and repositories.

mod connections;
mod post_repo;
mod schema;

pub mod entity;

pub use connections::{DatabaseConfig, PoolConfig, Storage};
pub use post_repo::SqlPostRepository;
pub use schema::{create_posts_table, ensure_schema};
