//! Manager for the publisher model.
use super::{Draft, Publisher, PublisherDetail, TABLE};
use crate::db::{
    models::{
        publication::{self, Publication},
        NotFound,
    },
    DatabaseConnection, DatabaseKind, DatabaseTransaction, Tx as _,
};
use async_trait::async_trait;

/// Resolve every publication id of `draft`, failing on the first one that is missing.
async fn resolve(
    tx: &mut DatabaseTransaction,
    draft: &Draft,
) -> anyhow::Result<Vec<Publication>> {
    let mut publications = Vec::with_capacity(draft.publications_ids.len());
    for publication_id in &draft.publications_ids {
        publications.push(publication::TxManager::find_by_id(&mut *tx, *publication_id).await?);
    }
    Ok(publications)
}

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Find all publishers.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_all(&self) -> anyhow::Result<Vec<Publisher>> {
        let statement = "
            SELECT id, name, email
            FROM publisher
            ORDER BY id
        ";
        let rows = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Publisher>(statement)
                    .fetch_all(&mut *connection)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Find a publisher by id and eagerly load its publications.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no publisher has this id.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn find_by_id(&self, id: i64) -> anyhow::Result<PublisherDetail> {
        let publisher_statement = "
            SELECT id, name, email
            FROM publisher
            WHERE id = $1
        ";
        let publications_statement = "
            SELECT id, title, description, COALESCE(publisher_id, 0) AS publisher_id
            FROM publication
            WHERE publisher_id = $1
            ORDER BY id
        ";
        match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                let publisher = sqlx::query_as::<_, Publisher>(publisher_statement)
                    .bind(id)
                    .fetch_optional(&mut *connection)
                    .await?
                    .ok_or_else(|| NotFound::new(TABLE, id))?;
                let publications = sqlx::query_as::<_, Publication>(publications_statement)
                    .bind(id)
                    .fetch_all(&mut *connection)
                    .await?;
                Ok(PublisherDetail {
                    publisher,
                    publications,
                })
            }
        }
    }

    /// Create a publisher.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if any publication id doesn't resolve.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn create(&self, draft: &Draft) -> anyhow::Result<i64> {
        let mut tx = DatabaseTransaction::begin(self.writer.clone()).await?;
        let id = super::TxManager::insert(&mut tx, draft).await?;
        tx.commit().await?;
        tracing::debug!(id, "Created publisher");
        Ok(id)
    }

    /// Update a publisher.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if the publisher or any publication id doesn't resolve.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn update(&self, id: i64, draft: &Draft) -> anyhow::Result<()> {
        let mut tx = DatabaseTransaction::begin(self.writer.clone()).await?;
        super::TxManager::update_by_id(&mut tx, id, draft).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Delete a publisher.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no publisher has this id.
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
    /// Find a publisher by id within the transaction.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no publisher has this id.
    async fn find_by_id(&mut self, id: i64) -> anyhow::Result<Publisher> {
        let statement = "
            SELECT id, name, email
            FROM publisher
            WHERE id = $1
        ";
        let row = sqlx::query_as::<_, Publisher>(statement)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(row.ok_or_else(|| NotFound::new(TABLE, id))?)
    }

    /// Insert a new publisher and point its publications at it.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if any publication id doesn't resolve.
    async fn insert(&mut self, draft: &Draft) -> anyhow::Result<i64> {
        let publications = resolve(&mut *self, draft).await?;
        let statement = "
            INSERT INTO publisher ( name, email )
            VALUES ( $1, $2 )
            RETURNING id
        ";
        let id = sqlx::query_scalar::<_, i64>(statement)
            .bind(&draft.name)
            .bind(&draft.email)
            .fetch_one(&mut *self.tx)
            .await?;
        for pb in &publications {
            publication::TxManager::assign_publisher(&mut *self, pb.id, Some(id)).await?;
        }
        Ok(id)
    }

    /// Overwrite a publisher. Publications not listed in the draft lose their publisher.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if the publisher or any publication id doesn't resolve.
    async fn update_by_id(&mut self, id: i64, draft: &Draft) -> anyhow::Result<()> {
        super::TxManager::find_by_id(&mut *self, id).await?;
        let publications = resolve(&mut *self, draft).await?;
        let statement = "
            UPDATE publisher
            SET name = $1, email = $2
            WHERE id = $3
        ";
        sqlx::query(statement)
            .bind(&draft.name)
            .bind(&draft.email)
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        publication::TxManager::clear_publisher(&mut *self, id).await?;
        for pb in &publications {
            publication::TxManager::assign_publisher(&mut *self, pb.id, Some(id)).await?;
        }
        Ok(())
    }

    /// Delete a publisher, leaving its publications without one.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no publisher has this id.
    async fn delete_by_id(&mut self, id: i64) -> anyhow::Result<()> {
        super::TxManager::find_by_id(&mut *self, id).await?;
        publication::TxManager::clear_publisher(&mut *self, id).await?;
        let statement = "
            DELETE FROM publisher
            WHERE id = $1
        ";
        sqlx::query(statement)
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }
}
