//! Post entity for SeaORM, plus the row shapes of the read projections.

use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::*;

use blog_core::domain::{PostFull, PostSummary};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    #[sea_orm(column_type = "Text")]
    pub author: String,
    /// Naive UTC, filled in by the column default on insert.
    pub date: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Columns read for the post list.
#[derive(Debug, FromQueryResult)]
pub struct SummaryRow {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub date: DateTime,
}

/// Columns read for a single post.
#[derive(Debug, FromQueryResult)]
pub struct FullRow {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub date: DateTime,
}

impl From<SummaryRow> for PostSummary {
    fn from(row: SummaryRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            author: row.author,
            date: row.date.and_utc(),
        }
    }
}

impl From<FullRow> for PostFull {
    fn from(row: FullRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            body: row.body,
            date: row.date.and_utc(),
        }
    }
}
