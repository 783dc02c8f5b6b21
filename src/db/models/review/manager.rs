//! Manager for the review model.
use super::{Draft, Review, TABLE};
use crate::db::{
    models::{publication, NotFound},
    DatabaseConnection, DatabaseKind, DatabaseTransaction, Tx as _,
};
use async_trait::async_trait;

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Find all reviews.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_all(&self) -> anyhow::Result<Vec<Review>> {
        let statement = "
            SELECT id, reviewer_name, is_positive, comment, COALESCE(publication_id, 0) AS publication_id
            FROM review
            ORDER BY id
        ";
        let rows = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Review>(statement)
                    .fetch_all(&mut *connection)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Find a review by id.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no review has this id.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Review> {
        let statement = "
            SELECT id, reviewer_name, is_positive, comment, COALESCE(publication_id, 0) AS publication_id
            FROM review
            WHERE id = $1
        ";
        let row = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Review>(statement)
                    .bind(id)
                    .fetch_optional(&mut *connection)
                    .await?
            }
        };
        Ok(row.ok_or_else(|| NotFound::new(TABLE, id))?)
    }

    /// Create a review.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if the publication id doesn't resolve.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn create(&self, draft: &Draft) -> anyhow::Result<i64> {
        let mut tx = DatabaseTransaction::begin(self.writer.clone()).await?;
        let id = super::TxManager::insert(&mut tx, draft).await?;
        tx.commit().await?;
        tracing::debug!(id, "Created review");
        Ok(id)
    }

    /// Update a review.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if the review or the publication id doesn't resolve.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn update(&self, id: i64, draft: &Draft) -> anyhow::Result<()> {
        let mut tx = DatabaseTransaction::begin(self.writer.clone()).await?;
        super::TxManager::update_by_id(&mut tx, id, draft).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Delete a review.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no review has this id.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn delete(&self, id: i64) -> anyhow::Result<()> {
        let mut tx = DatabaseTransaction::begin(self.writer.clone()).await?;
        super::TxManager::delete_by_id(&mut tx, id).await?;
        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl super::TxManager for DatabaseTransaction {
    /// Find a review by id within the transaction.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no review has this id.
    async fn find_by_id(&mut self, id: i64) -> anyhow::Result<Review> {
        let statement = "
            SELECT id, reviewer_name, is_positive, comment, COALESCE(publication_id, 0) AS publication_id
            FROM review
            WHERE id = $1
        ";
        let row = sqlx::query_as::<_, Review>(statement)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(row.ok_or_else(|| NotFound::new(TABLE, id))?)
    }

    /// Insert a new review into the database.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if the publication id doesn't resolve.
    async fn insert(&mut self, draft: &Draft) -> anyhow::Result<i64> {
        let reviewed = publication::TxManager::find_by_id(&mut *self, draft.publication_id).await?;
        let statement = "
            INSERT INTO review ( reviewer_name, is_positive, comment, publication_id )
            VALUES ( $1, $2, $3, $4 )
            RETURNING id
        ";
        let id = sqlx::query_scalar::<_, i64>(statement)
            .bind(&draft.reviewer_name)
            .bind(i64::from(draft.is_positive))
            .bind(&draft.comment)
            .bind(reviewed.id)
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(id)
    }

    /// Overwrite a review.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if the review or the publication id doesn't resolve.
    async fn update_by_id(&mut self, id: i64, draft: &Draft) -> anyhow::Result<()> {
        super::TxManager::find_by_id(&mut *self, id).await?;
        let reviewed = publication::TxManager::find_by_id(&mut *self, draft.publication_id).await?;
        let statement = "
            UPDATE review
            SET reviewer_name = $1, is_positive = $2, comment = $3, publication_id = $4
            WHERE id = $5
        ";
        sqlx::query(statement)
            .bind(&draft.reviewer_name)
            .bind(i64::from(draft.is_positive))
            .bind(&draft.comment)
            .bind(reviewed.id)
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    /// Delete a review.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no review has this id.
    async fn delete_by_id(&mut self, id: i64) -> anyhow::Result<()> {
        super::TxManager::find_by_id(&mut *self, id).await?;
        let statement = "
            DELETE FROM review
            WHERE id = $1
        ";
        sqlx::query(statement)
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    /// Set the publication of a review.
    ///
    /// # Errors
    /// Errors if the review cannot be updated.
    async fn assign_publication(
        &mut self,
        id: i64,
        publication_id: Option<i64>,
    ) -> anyhow::Result<()> {
        let statement = "
            UPDATE review
            SET publication_id = $1
            WHERE id = $2
        ";
        sqlx::query(statement)
            .bind(publication_id)
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    /// Set the publication of every review of `publication_id` to null.
    ///
    /// # Errors
    /// Errors if the reviews cannot be updated.
    async fn clear_publication(&mut self, publication_id: i64) -> anyhow::Result<()> {
        let statement = "
            UPDATE review
            SET publication_id = NULL
            WHERE publication_id = $1
        ";
        let affected = sqlx::query(statement)
            .bind(publication_id)
            .execute(&mut *self.tx)
            .await?
            .rows_affected();
        tracing::trace!(publication_id, affected, "Cleared publication of reviews");
        Ok(())
    }
}
