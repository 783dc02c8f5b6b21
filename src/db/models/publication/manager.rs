//! Manager for the publication model.
use super::{Draft, Publication, PublicationDetail, TABLE};
use crate::db::{
    models::{
        author::{self, Author},
        publisher::{self, Publisher},
        review::{self, Review},
        NotFound, BATCH_SIZE,
    },
    DatabaseConnection, DatabaseKind, DatabaseTransaction, Tx as _,
};
use async_trait::async_trait;
use sqlx::QueryBuilder;

/// Relations of a draft after every id has been resolved.
struct Resolved {
    /// Authors, one per id in the draft.
    authors: Vec<Author>,
    /// Reviews, one per id in the draft.
    reviews: Vec<Review>,
    /// Publisher, if the draft names one.
    publisher: Option<Publisher>,
}

/// Resolve every relation id of `draft`, failing on the first one that is missing.
async fn resolve(tx: &mut DatabaseTransaction, draft: &Draft) -> anyhow::Result<Resolved> {
    let mut authors = Vec::with_capacity(draft.authors_ids.len());
    for author_id in &draft.authors_ids {
        authors.push(author::TxManager::find_by_id(&mut *tx, *author_id).await?);
    }
    let mut reviews = Vec::with_capacity(draft.reviews_ids.len());
    for review_id in &draft.reviews_ids {
        reviews.push(review::TxManager::find_by_id(&mut *tx, *review_id).await?);
    }
    let publisher = match draft.publisher_id {
        Some(publisher_id) => Some(publisher::TxManager::find_by_id(&mut *tx, publisher_id).await?),
        None => None,
    };
    Ok(Resolved {
        authors,
        reviews,
        publisher,
    })
}

/// Link the resolved relations to the publication `id`.
async fn attach(tx: &mut DatabaseTransaction, id: i64, resolved: &Resolved) -> anyhow::Result<()> {
    super::TxManager::link_authors(&mut *tx, id, &resolved.authors).await?;
    for rv in &resolved.reviews {
        review::TxManager::assign_publication(&mut *tx, rv.id, Some(id)).await?;
    }
    Ok(())
}

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Find all publications.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_all(&self) -> anyhow::Result<Vec<Publication>> {
        let statement = "
            SELECT id, title, description, COALESCE(publisher_id, 0) AS publisher_id
            FROM publication
            ORDER BY id
        ";
        let rows = match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                sqlx::query_as::<_, Publication>(statement)
                    .fetch_all(&mut *connection)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Find a publication by id and eagerly load its authors, reviews and publisher.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no publication has this id.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn find_by_id(&self, id: i64) -> anyhow::Result<PublicationDetail> {
        let publication_statement = "
            SELECT id, title, description, COALESCE(publisher_id, 0) AS publisher_id
            FROM publication
            WHERE id = $1
        ";
        let authors_statement = "
            SELECT a.id, a.name, a.biography
            FROM publication_author pa
            JOIN author a ON a.id = pa.author_id
            WHERE pa.publication_id = $1
            ORDER BY pa.id
        ";
        let reviews_statement = "
            SELECT id, reviewer_name, is_positive, comment, COALESCE(publication_id, 0) AS publication_id
            FROM review
            WHERE publication_id = $1
            ORDER BY id
        ";
        let publisher_statement = "
            SELECT id, name, email
            FROM publisher
            WHERE id = $1
        ";
        match self.kind {
            DatabaseKind::Sqlite => {
                let mut connection = self.pool.acquire().await?;
                let publication = sqlx::query_as::<_, Publication>(publication_statement)
                    .bind(id)
                    .fetch_optional(&mut *connection)
                    .await?
                    .ok_or_else(|| NotFound::new(TABLE, id))?;
                let authors = sqlx::query_as::<_, Author>(authors_statement)
                    .bind(id)
                    .fetch_all(&mut *connection)
                    .await?;
                let reviews = sqlx::query_as::<_, Review>(reviews_statement)
                    .bind(id)
                    .fetch_all(&mut *connection)
                    .await?;
                let publisher = match publication.publisher_id {
                    Some(publisher_id) => {
                        sqlx::query_as::<_, Publisher>(publisher_statement)
                            .bind(publisher_id)
                            .fetch_optional(&mut *connection)
                            .await?
                    }
                    None => None,
                };
                Ok(PublicationDetail {
                    publication,
                    authors,
                    reviews,
                    publisher,
                })
            }
        }
    }

    /// Create a publication.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if any author, review or publisher id doesn't resolve.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn create(&self, draft: &Draft) -> anyhow::Result<i64> {
        let mut tx = DatabaseTransaction::begin(self.writer.clone()).await?;
        let id = super::TxManager::insert(&mut tx, draft).await?;
        tx.commit().await?;
        tracing::debug!(id, "Created publication");
        Ok(id)
    }

    /// Update a publication.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if the publication or any relation id doesn't resolve.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn update(&self, id: i64, draft: &Draft) -> anyhow::Result<()> {
        let mut tx = DatabaseTransaction::begin(self.writer.clone()).await?;
        super::TxManager::update_by_id(&mut tx, id, draft).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Delete a publication.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no publication has this id.
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
    /// Find a publication by id within the transaction.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no publication has this id.
    async fn find_by_id(&mut self, id: i64) -> anyhow::Result<Publication> {
        let statement = "
            SELECT id, title, description, COALESCE(publisher_id, 0) AS publisher_id
            FROM publication
            WHERE id = $1
        ";
        let row = sqlx::query_as::<_, Publication>(statement)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(row.ok_or_else(|| NotFound::new(TABLE, id))?)
    }

    /// Insert a new publication into the database and link its relations.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if any relation id doesn't resolve.
    async fn insert(&mut self, draft: &Draft) -> anyhow::Result<i64> {
        let resolved = resolve(&mut *self, draft).await?;
        let statement = "
            INSERT INTO publication ( title, description, publisher_id )
            VALUES ( $1, $2, $3 )
            RETURNING id
        ";
        let id = sqlx::query_scalar::<_, i64>(statement)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(resolved.publisher.as_ref().map(|pb| pb.id))
            .fetch_one(&mut *self.tx)
            .await?;
        attach(&mut *self, id, &resolved).await?;
        Ok(id)
    }

    /// Overwrite a publication. Relations missing from the draft are cleared.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if the publication or any relation id doesn't resolve.
    async fn update_by_id(&mut self, id: i64, draft: &Draft) -> anyhow::Result<()> {
        super::TxManager::find_by_id(&mut *self, id).await?;
        let resolved = resolve(&mut *self, draft).await?;
        let statement = "
            UPDATE publication
            SET title = $1, description = $2, publisher_id = $3
            WHERE id = $4
        ";
        sqlx::query(statement)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(resolved.publisher.as_ref().map(|pb| pb.id))
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        super::TxManager::unlink_authors(&mut *self, id).await?;
        review::TxManager::clear_publication(&mut *self, id).await?;
        attach(&mut *self, id, &resolved).await?;
        Ok(())
    }

    /// Delete a publication. Authors and reviews are detached, never deleted.
    ///
    /// # Errors
    /// Errors with [`NotFound`] if no publication has this id.
    async fn delete_by_id(&mut self, id: i64) -> anyhow::Result<()> {
        super::TxManager::find_by_id(&mut *self, id).await?;
        super::TxManager::unlink_authors(&mut *self, id).await?;
        review::TxManager::clear_publication(&mut *self, id).await?;
        let statement = "
            DELETE FROM publication
            WHERE id = $1
        ";
        sqlx::query(statement)
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    /// Bulk insert author links.
    ///
    /// # Errors
    /// Errors if the links cannot be inserted into the database.
    async fn link_authors(&mut self, id: i64, authors: &[Author]) -> anyhow::Result<()> {
        for chunk in authors.chunks(BATCH_SIZE) {
            let mut query_builder = QueryBuilder::<sqlx::Any>::new(
                "INSERT INTO publication_author ( publication_id, author_id ) ",
            );
            query_builder.push_values(chunk, |mut bindings, au| {
                bindings.push_bind(id).push_bind(au.id);
            });
            query_builder.build().execute(&mut *self.tx).await?;
        }
        Ok(())
    }

    /// Remove all author links of a publication.
    ///
    /// # Errors
    /// Errors if the links cannot be deleted.
    async fn unlink_authors(&mut self, id: i64) -> anyhow::Result<()> {
        let statement = "
            DELETE FROM publication_author
            WHERE publication_id = $1
        ";
        sqlx::query(statement)
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    /// Remove all links to an author.
    ///
    /// # Errors
    /// Errors if the links cannot be deleted.
    async fn unlink_author(&mut self, author_id: i64) -> anyhow::Result<()> {
        let statement = "
            DELETE FROM publication_author
            WHERE author_id = $1
        ";
        let affected = sqlx::query(statement)
            .bind(author_id)
            .execute(&mut *self.tx)
            .await?
            .rows_affected();
        tracing::trace!(author_id, affected, "Unlinked author from publications");
        Ok(())
    }

    /// Set the publisher of a publication.
    ///
    /// # Errors
    /// Errors if the publication cannot be updated.
    async fn assign_publisher(
        &mut self,
        id: i64,
        publisher_id: Option<i64>,
    ) -> anyhow::Result<()> {
        let statement = "
            UPDATE publication
            SET publisher_id = $1
            WHERE id = $2
        ";
        sqlx::query(statement)
            .bind(publisher_id)
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    /// Set the publisher of every publication owned by `publisher_id` to null.
    ///
    /// # Errors
    /// Errors if the publications cannot be updated.
    async fn clear_publisher(&mut self, publisher_id: i64) -> anyhow::Result<()> {
        let statement = "
            UPDATE publication
            SET publisher_id = NULL
            WHERE publisher_id = $1
        ";
        let affected = sqlx::query(statement)
            .bind(publisher_id)
            .execute(&mut *self.tx)
            .await?
            .rows_affected();
        tracing::trace!(publisher_id, affected, "Cleared publisher of publications");
        Ok(())
    }
}
