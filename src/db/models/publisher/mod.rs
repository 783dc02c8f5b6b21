use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{any::AnyRow, FromRow, Row as _};

use super::publication::Publication;

pub mod manager;

/// Table name, also used when reporting missing publishers.
pub const TABLE: &str = "publisher";

/// Trait for managing publishers.
#[async_trait]
pub trait Manager {
    /// Find all publishers, ordered by id.
    async fn find_all(&self) -> anyhow::Result<Vec<Publisher>>;
    /// Find one publisher by id, with its publications loaded.
    async fn find_by_id(&self, id: i64) -> anyhow::Result<PublisherDetail>;
    /// Create a publisher and take ownership of its publications in one transaction.
    async fn create(&self, draft: &Draft) -> anyhow::Result<i64>;
    /// Replace a publisher's fields and publications in one transaction.
    async fn update(&self, id: i64, draft: &Draft) -> anyhow::Result<()>;
    /// Delete a publisher, clearing the publisher of its publications in one transaction.
    async fn delete(&self, id: i64) -> anyhow::Result<()>;
}

/// Trait for managing transactions on publishers.
#[async_trait]
pub trait TxManager {
    /// Resolve a publisher id inside the transaction.
    async fn find_by_id(&mut self, id: i64) -> anyhow::Result<Publisher>;
    /// Resolve the draft's publications, insert the publisher and take them over.
    async fn insert(&mut self, draft: &Draft) -> anyhow::Result<i64>;
    /// Resolve the draft's publications and replace the publisher wholesale.
    async fn update_by_id(&mut self, id: i64, draft: &Draft) -> anyhow::Result<()>;
    /// Remove a publisher. Its publications stay, without a publisher.
    async fn delete_by_id(&mut self, id: i64) -> anyhow::Result<()>;
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
/// Model for a publisher.
pub struct Publisher {
    /// Store-assigned identifier.
    pub id: i64,
    /// Name of the publishing house.
    pub name: String,
    /// Contact email.
    pub email: String,
}

impl FromRow<'_, AnyRow> for Publisher {
    fn from_row(row: &AnyRow) -> anyhow::Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
        })
    }
}

/// A publisher with the publications it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherDetail {
    /// The publisher row itself.
    pub publisher: Publisher,
    /// Publications pointing at this publisher, ordered by id.
    pub publications: Vec<Publication>,
}

/// Fields and unresolved publication ids needed to create or overwrite a publisher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Name of the publishing house.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Ids of the publications the publisher owns.
    pub publications_ids: Vec<i64>,
}
