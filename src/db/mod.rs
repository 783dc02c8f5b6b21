//! Database related module.
use async_trait::async_trait;
use sqlx::Transaction;
use std::str::FromStr;

use sqlx::any::{self, AnyPoolOptions};
use sqlx::AnyPool;
use sqlx::ConnectOptions;
use tracing::instrument;

/// Database initialization.
pub mod init;
/// Models for the database.
pub mod models;

#[async_trait]
/// Generic Database
pub trait Db {
    /// Connects to a database.
    ///
    /// # Errors
    /// Errors if connection to database fails.
    async fn connect(url: &str, max_connections: u32) -> anyhow::Result<DatabaseConnection>;
}

#[async_trait]
/// Generic transaction
pub trait Tx {
    /// Begin a transaction.
    async fn begin(pool: AnyPool) -> anyhow::Result<DatabaseTransaction>;
    /// Commit a transaction.
    async fn commit(self) -> anyhow::Result<()>;
    /// Rollback a transaction.
    async fn rollback(self) -> anyhow::Result<()>;
}

/// Type of database connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    /// Sqlite database.
    Sqlite,
}

impl DatabaseKind {
    /// Determine the kind of database from its connection url.
    ///
    /// # Errors
    /// Errors if the url points at a database we don't support.
    pub fn from_url(url: &str) -> anyhow::Result<Self> {
        match url {
            url if url.starts_with("sqlite:") => Ok(Self::Sqlite),
            _ => anyhow::bail!("Unsupported database URL: {}", url),
        }
    }
}

/// Database connection.
///
/// Reads go through `pool`. Write transactions are opened on `writer`, which holds a
/// single connection, so writers queue in the pool instead of racing for the SQLite
/// write lock.
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    /// Database connection pool.
    pub pool: AnyPool,
    /// Single-connection pool for write transactions.
    pub writer: AnyPool,
    /// Type of database connection.
    pub kind: DatabaseKind,
}

/// Database transaction.
///
/// Dropping a transaction without calling [`Tx::commit`] rolls it back, which is
/// what happens when a request is cancelled mid-flight.
pub struct DatabaseTransaction {
    /// Database transaction.
    pub tx: Transaction<'static, sqlx::Any>,
}

#[async_trait]
impl Db for DatabaseConnection {
    /// Connects to a database.
    ///
    /// # Errors
    /// Errors if connection to database fails.
    #[instrument(level = "trace")]
    async fn connect(db_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let kind = DatabaseKind::from_url(db_url)?;
        any::install_default_drivers();
        let options = any::AnyConnectOptions::from_str(db_url)?.disable_statement_logging();
        let writer = AnyPoolOptions::new()
            .max_connections(1)
            .connect_with(options.clone())
            .await?;
        let pool = AnyPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self { pool, writer, kind })
    }
}

#[async_trait]
impl Tx for DatabaseTransaction {
    /// Begin a transaction.
    async fn begin(pool: AnyPool) -> anyhow::Result<Self> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }
    /// Commit a transaction.
    async fn commit(self) -> anyhow::Result<()> {
        self.tx.commit().await?;
        Ok(())
    }

    /// Rollback a transaction.
    async fn rollback(self) -> anyhow::Result<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}
