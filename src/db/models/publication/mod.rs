use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{any::AnyRow, FromRow, Row as _};

use super::{author::Author, nullable_id, publisher::Publisher, review::Review};

pub mod manager;

/// Table name, also used when reporting missing publications.
pub const TABLE: &str = "publication";

/// Trait for managing publications.
#[async_trait]
pub trait Manager {
    /// Find all publications, ordered by id.
    async fn find_all(&self) -> anyhow::Result<Vec<Publication>>;
    /// Find one publication by id, with its authors, reviews and publisher loaded.
    async fn find_by_id(&self, id: i64) -> anyhow::Result<PublicationDetail>;
    /// Create a publication and link its relations in one transaction.
    async fn create(&self, draft: &Draft) -> anyhow::Result<i64>;
    /// Replace a publication's fields and relations in one transaction.
    async fn update(&self, id: i64, draft: &Draft) -> anyhow::Result<()>;
    /// Delete a publication, detaching its authors and reviews in one transaction.
    async fn delete(&self, id: i64) -> anyhow::Result<()>;
}

/// Trait for managing transactions on publications.
#[async_trait]
pub trait TxManager {
    /// Resolve a publication id inside the transaction.
    async fn find_by_id(&mut self, id: i64) -> anyhow::Result<Publication>;
    /// Resolve every relation id of the draft, insert the publication and link it.
    async fn insert(&mut self, draft: &Draft) -> anyhow::Result<i64>;
    /// Resolve every relation id of the draft and replace the publication wholesale.
    async fn update_by_id(&mut self, id: i64, draft: &Draft) -> anyhow::Result<()>;
    /// Remove a publication. Its reviews stay, with their publication cleared.
    async fn delete_by_id(&mut self, id: i64) -> anyhow::Result<()>;
    /// Insert one link row per author, in order. Duplicates are kept.
    async fn link_authors(&mut self, id: i64, authors: &[Author]) -> anyhow::Result<()>;
    /// Drop every author link of a publication.
    async fn unlink_authors(&mut self, id: i64) -> anyhow::Result<()>;
    /// Drop every link to an author, across all publications.
    async fn unlink_author(&mut self, author_id: i64) -> anyhow::Result<()>;
    /// Point a publication at a publisher, or at none.
    async fn assign_publisher(&mut self, id: i64, publisher_id: Option<i64>)
        -> anyhow::Result<()>;
    /// Clear the publisher of every publication it owns.
    async fn clear_publisher(&mut self, publisher_id: i64) -> anyhow::Result<()>;
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
/// Model for a publication row.
pub struct Publication {
    /// Store-assigned identifier.
    pub id: i64,
    /// Title of the publication.
    pub title: String,
    /// Free form description.
    pub description: String,
    /// Foreign key reference to the publisher, cleared when the publisher is deleted.
    pub publisher_id: Option<i64>,
}

impl FromRow<'_, AnyRow> for Publication {
    fn from_row(row: &AnyRow) -> anyhow::Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            publisher_id: nullable_id(row.try_get("publisher_id")?),
        })
    }
}

/// A publication with the relations its full transfer form is projected from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationDetail {
    /// The publication row itself.
    pub publication: Publication,
    /// Linked authors, in link order.
    pub authors: Vec<Author>,
    /// Reviews pointing at this publication, ordered by id.
    pub reviews: Vec<Review>,
    /// The owning publisher, if any.
    pub publisher: Option<Publisher>,
}

/// Fields and unresolved relation ids needed to create or overwrite a publication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Title of the publication.
    pub title: String,
    /// Free form description.
    pub description: String,
    /// Ids of the authors to link.
    pub authors_ids: Vec<i64>,
    /// Ids of the reviews to attach.
    pub reviews_ids: Vec<i64>,
    /// Id of the owning publisher.
    pub publisher_id: Option<i64>,
}
