//! Manager for the author model.
use super::{Author, Draft, TABLE};
use crate::db::{
    models::{publication, NotFound},
    DatabaseConnection, DatabaseKind, DatabaseTransaction, Tx as _,
};
use async_trait::async_trait;

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Find all authors.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_all(&self) -> anyhow::Result<Vec<Author>> {
        let statement = "
            SELECT id, name, biography
            FROM author
            ORDER BY id
        ";
        let rows = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Author>(statement)
                    .fetch_all(&mut *connection)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Find an author by id.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no author has this id.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Author> {
        let statement = "
            SELECT id, name, biography
            FROM author
            WHERE id = $1
        ";
        let row = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Author>(statement)
                    .bind(id)
                    .fetch_optional(&mut *connection)
                    .await?
            }
        };
        Ok(row.ok_or_else(|| NotFound::new(TABLE, id))?)
    }

    /// Create an author.
    ///
    /// # Errors
    /// Errors if the author cannot be inserted.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn create(&self, draft: &Draft) -> anyhow::Result<i64> {
        let mut tx = DatabaseTransaction::begin(self.writer.clone()).await?;
        let id = super::TxManager::insert(&mut tx, draft).await?;
        tx.commit().await?;
        tracing::debug!(id, "Created author");
        Ok(id)
    }

    /// Update an author.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no author has this id.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn update(&self, id: i64, draft: &Draft) -> anyhow::Result<()> {
        let mut tx = DatabaseTransaction::begin(self.writer.clone()).await?;
        super::TxManager::update_by_id(&mut tx, id, draft).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Delete an author.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no author has this id.
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
    /// Find an author by id within the transaction.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no author has this id.
    async fn find_by_id(&mut self, id: i64) -> anyhow::Result<Author> {
        let statement = "
            SELECT id, name, biography
            FROM author
            WHERE id = $1
        ";
        let row = sqlx::query_as::<_, Author>(statement)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(row.ok_or_else(|| NotFound::new(TABLE, id))?)
    }

    /// Insert a new author into the database.
    ///
    /// # Errors
    /// Errors if the author cannot be inserted into the database.
    async fn insert(&mut self, draft: &Draft) -> anyhow::Result<i64> {
        let statement = "
            INSERT INTO author ( name, biography )
            VALUES ( $1, $2 )
            RETURNING id
        ";
        let id = sqlx::query_scalar::<_, i64>(statement)
            .bind(&draft.name)
            .bind(&draft.biography)
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(id)
    }

    /// Overwrite the name and biography of an author.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no author has this id.
    async fn update_by_id(&mut self, id: i64, draft: &Draft) -> anyhow::Result<()> {
        super::TxManager::find_by_id(&mut *self, id).await?;
        let statement = "
            UPDATE author
            SET name = $1, biography = $2
            WHERE id = $3
        ";
        sqlx::query(statement)
            .bind(&draft.name)
            .bind(&draft.biography)
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    /// Delete an author. Publications keep existing, only their link to the author goes.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no author has this id.
    async fn delete_by_id(&mut self, id: i64) -> anyhow::Result<()> {
        super::TxManager::find_by_id(&mut *self, id).await?;
        publication::TxManager::unlink_author(&mut *self, id).await?;
        let statement = "
            DELETE FROM author
            WHERE id = $1
        ";
        sqlx::query(statement)
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }
}
