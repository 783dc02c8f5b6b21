use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{any::AnyRow, FromRow, Row as _};

pub mod manager;

/// Table name, also used when reporting missing authors.
pub const TABLE: &str = "author";

/// Trait for managing authors.
#[async_trait]
pub trait Manager {
    /// Find all authors, ordered by id.
    async fn find_all(&self) -> anyhow::Result<Vec<Author>>;
    /// Find one author by id.
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Author>;
    /// Create an author in its own transaction and return its id.
    async fn create(&self, draft: &Draft) -> anyhow::Result<i64>;
    /// Replace the fields of an author in its own transaction.
    async fn update(&self, id: i64, draft: &Draft) -> anyhow::Result<()>;
    /// Delete an author and unlink it from every publication in one transaction.
    async fn delete(&self, id: i64) -> anyhow::Result<()>;
}

/// Trait for managing transactions on authors.
#[async_trait]
pub trait TxManager {
    /// Resolve an author id inside the transaction.
    async fn find_by_id(&mut self, id: i64) -> anyhow::Result<Author>;
    /// Insert a new author.
    async fn insert(&mut self, draft: &Draft) -> anyhow::Result<i64>;
    /// Overwrite an existing author.
    async fn update_by_id(&mut self, id: i64, draft: &Draft) -> anyhow::Result<()>;
    /// Remove an author, clearing its publication links first.
    async fn delete_by_id(&mut self, id: i64) -> anyhow::Result<()>;
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
/// Model for an author.
pub struct Author {
    /// Store-assigned identifier.
    pub id: i64,
    /// Full name of the author.
    pub name: String,
    /// Short biography.
    pub biography: String,
}

impl FromRow<'_, AnyRow> for Author {
    fn from_row(row: &AnyRow) -> anyhow::Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            biography: row.try_get("biography")?,
        })
    }
}

/// Fields needed to create or overwrite an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Full name of the author.
    pub name: String,
    /// Short biography.
    pub biography: String,
}
