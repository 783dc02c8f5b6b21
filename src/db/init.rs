use crate::db::{DatabaseConnection, DatabaseKind, Db as _};

/// Connects to a database and applies migrations.
///
/// # Errors
/// Errors if connection to database fails.
/// Connections can fail if the database file cannot be opened, or if the database URL is invalid.
pub async fn connect(db_url: &str, max_connections: u32) -> anyhow::Result<DatabaseConnection> {
    let connection = DatabaseConnection::connect(db_url, max_connections).await?;
    tracing::info!("Connected to database");
    match connection.kind {
        DatabaseKind::Sqlite => {
            sqlx::migrate!("./migrations/sqlite")
                .run(&connection.writer)
                .await?;
        }
    }
    tracing::debug!("Applied database migrations");
    Ok(connection)
}
