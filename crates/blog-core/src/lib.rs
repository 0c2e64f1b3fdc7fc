//! # Blog Core
//!
//! The domain layer of the blog API.
//! This crate holds the post projections, the repository port and the
//! request-handling rules, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::PostService;
