//! Schema creation for the posts table.

use sea_orm::ConnectionTrait;
use sea_orm::sea_query::{ColumnDef, Expr, Table, TableCreateStatement};

use blog_core::RepoError;

use super::connections::{Storage, repo_error};
use super::entity::post;

/// `CREATE TABLE IF NOT EXISTS posts (...)` for whichever backend runs it.
pub fn create_posts_table() -> TableCreateStatement {
    Table::create()
        .table(post::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(post::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(post::Column::Title).text().not_null())
        .col(ColumnDef::new(post::Column::Body).text().not_null())
        .col(ColumnDef::new(post::Column::Author).text().not_null())
        .col(
            ColumnDef::new(post::Column::Date)
                .date_time()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

/// Make sure the posts table exists. Safe to call any number of times.
pub async fn ensure_schema(storage: &Storage) -> Result<(), RepoError> {
    let lease = storage.acquire().await?;
    let conn = lease.conn();
    let stmt = conn.get_database_backend().build(&create_posts_table());
    let result = conn.execute(stmt).await;
    lease.release().await;

    result.map_err(repo_error)?;
    tracing::info!("Schema ready: posts table exists");
    Ok(())
}
