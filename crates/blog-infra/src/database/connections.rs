use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

use blog_core::RepoError;

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub connect_timeout: Duration,
    /// When set, one pool is opened at startup and shared by every operation.
    /// Otherwise each operation opens and closes its own connection.
    pub pool: Option<PoolConfig>,
}

/// Sizing for a shared connection pool.
#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout: Duration::from_secs(10),
            pool: None,
        }
    }

    pub fn with_pool(mut self, max_connections: u32, min_connections: u32) -> Self {
        self.pool = Some(PoolConfig {
            max_connections,
            min_connections: min_connections.min(max_connections),
        });
        self
    }

    /// In-memory SQLite databases vanish with their last connection.
    pub fn is_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// The pool actually opened by [`Storage::init`].
    ///
    /// An in-memory SQLite database is private to its connection, so a memory
    /// pool is capped at one connection to keep every statement on the same data.
    pub fn effective_pool(&self) -> Option<PoolConfig> {
        let pool = self.pool?;
        if self.is_memory() && pool.max_connections > 1 {
            return Some(PoolConfig {
                max_connections: 1,
                min_connections: pool.min_connections.min(1),
            });
        }
        Some(pool)
    }

    fn connect_options(&self, max_connections: u32, min_connections: u32) -> ConnectOptions {
        ConnectOptions::new(&self.url)
            .max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(self.connect_timeout)
            .sqlx_logging(true)
            .to_owned()
    }
}

/// How repository operations obtain a database connection.
///
/// # Example
/// ```ignore
/// let storage = Storage::init(&DatabaseConfig::new("sqlite://database.db?mode=rwc")).await?;
/// ensure_schema(&storage).await?;
/// let repo = SqlPostRepository::new(storage);
/// ```
pub enum Storage {
    /// Connect, run one statement, close.
    PerOperation(DatabaseConfig),
    /// Check a connection out of a long-lived pool for each statement.
    Pooled(DbConn),
}

impl Storage {
    /// Build the storage strategy described by `config`.
    ///
    /// Only the pooled strategy touches the database here; the per-operation
    /// strategy first connects when an operation runs.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, RepoError> {
        match config.effective_pool() {
            Some(pool) => {
                if config.pool.is_some_and(|p| p.max_connections != pool.max_connections) {
                    tracing::warn!(
                        url = %config.url,
                        "In-memory database: pool capped at a single connection"
                    );
                }
                let conn = Database::connect(
                    config.connect_options(pool.max_connections, pool.min_connections),
                )
                .await
                .map_err(repo_error)?;
                tracing::info!(
                    max_connections = pool.max_connections,
                    "Database pool connected"
                );
                Ok(Self::Pooled(conn))
            }
            None => {
                if config.is_memory() {
                    tracing::warn!(
                        url = %config.url,
                        "In-memory database without a pool: data will not outlive a single operation"
                    );
                }
                tracing::info!("Using one database connection per operation");
                Ok(Self::PerOperation(config.clone()))
            }
        }
    }

    /// Wrap an already opened connection.
    pub fn pooled(conn: DbConn) -> Self {
        Self::Pooled(conn)
    }

    pub(crate) async fn acquire(&self) -> Result<Lease<'_>, RepoError> {
        match self {
            Self::PerOperation(config) => {
                let conn = Database::connect(config.connect_options(1, 0))
                    .await
                    .map_err(repo_error)?;
                Ok(Lease::Owned(conn))
            }
            Self::Pooled(conn) => Ok(Lease::Shared(conn)),
        }
    }

    /// Check that the database answers.
    pub async fn ping(&self) -> Result<(), RepoError> {
        let lease = self.acquire().await?;
        let result = lease.conn().ping().await;
        lease.release().await;
        result.map_err(repo_error)
    }
}

/// A connection held for the duration of one statement.
pub(crate) enum Lease<'a> {
    Owned(DbConn),
    Shared(&'a DbConn),
}

impl Lease<'_> {
    pub(crate) fn conn(&self) -> &DbConn {
        match self {
            Lease::Owned(conn) => conn,
            Lease::Shared(conn) => conn,
        }
    }

    /// Close an owned connection. Shared connections go back to their pool untouched.
    pub(crate) async fn release(self) {
        if let Lease::Owned(conn) = self {
            if let Err(e) = conn.close().await {
                tracing::warn!(error = %e, "Failed to close database connection");
            }
        }
    }
}

pub(crate) fn repo_error(err: DbErr) -> RepoError {
    match &err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}
