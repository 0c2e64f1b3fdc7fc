//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `sqlite` (default) - SQLite storage via SeaORM
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod database;

pub use database::{DatabaseConfig, PoolConfig, SqlPostRepository, Storage, ensure_schema};
