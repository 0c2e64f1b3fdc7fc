//! # Blog Shared
//!
//! Wire types exchanged with API clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
