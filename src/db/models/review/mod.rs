use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{any::AnyRow, FromRow, Row as _};

use super::nullable_id;

pub mod manager;

/// Table name, also used when reporting missing reviews.
pub const TABLE: &str = "review";

/// Trait for managing reviews.
#[async_trait]
pub trait Manager {
    /// Find all reviews, ordered by id.
    async fn find_all(&self) -> anyhow::Result<Vec<Review>>;
    /// Find one review by id.
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Review>;
    /// Create a review of an existing publication.
    async fn create(&self, draft: &Draft) -> anyhow::Result<i64>;
    /// Replace a review's fields and publication.
    async fn update(&self, id: i64, draft: &Draft) -> anyhow::Result<()>;
    /// Delete a review.
    async fn delete(&self, id: i64) -> anyhow::Result<()>;
}

/// Trait for managing transactions on reviews.
#[async_trait]
pub trait TxManager {
    /// Resolve a review id inside the transaction.
    async fn find_by_id(&mut self, id: i64) -> anyhow::Result<Review>;
    /// Resolve the draft's publication and insert the review.
    async fn insert(&mut self, draft: &Draft) -> anyhow::Result<i64>;
    /// Resolve the draft's publication and overwrite the review.
    async fn update_by_id(&mut self, id: i64, draft: &Draft) -> anyhow::Result<()>;
    /// Remove a review.
    async fn delete_by_id(&mut self, id: i64) -> anyhow::Result<()>;
    /// Point a review at a publication, or at none.
    async fn assign_publication(
        &mut self,
        id: i64,
        publication_id: Option<i64>,
    ) -> anyhow::Result<()>;
    /// Clear the publication of every review attached to it.
    async fn clear_publication(&mut self, publication_id: i64) -> anyhow::Result<()>;
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
/// Model for a review.
pub struct Review {
    /// Store-assigned identifier.
    pub id: i64,
    /// Name of whoever wrote the review.
    pub reviewer_name: String,
    /// Whether the review recommends the publication.
    pub is_positive: bool,
    /// Review text.
    pub comment: String,
    /// Foreign key reference to the reviewed publication, cleared when it is deleted.
    pub publication_id: Option<i64>,
}

impl FromRow<'_, AnyRow> for Review {
    fn from_row(row: &AnyRow) -> anyhow::Result<Self, sqlx::Error> {
        // Stored as an INTEGER column; sqlite has no native boolean.
        let is_positive: i64 = row.try_get("is_positive")?;
        Ok(Self {
            id: row.try_get("id")?,
            reviewer_name: row.try_get("reviewer_name")?,
            is_positive: is_positive != 0,
            comment: row.try_get("comment")?,
            publication_id: nullable_id(row.try_get("publication_id")?),
        })
    }
}

/// Fields needed to create or overwrite a review.
///
/// A review always names a publication when it is written; only deleting that
/// publication can leave it without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Name of whoever wrote the review.
    pub reviewer_name: String,
    /// Whether the review recommends the publication.
    pub is_positive: bool,
    /// Review text.
    pub comment: String,
    /// Id of the reviewed publication.
    pub publication_id: i64,
}
