//! This module contains all the sqlx structs for the database tables.
use derive_more::Display;

/// sqlx structs for author table.
pub mod author;
/// sqlx structs for publication and publication_author tables.
pub mod publication;
/// sqlx structs for publisher table.
pub mod publisher;
/// sqlx structs for review table.
pub mod review;

/// Maximum number of rows inserted by a single bulk statement.
pub const BATCH_SIZE: usize = 1000;

/// An id (of the entity itself or of one of its relations) that doesn't resolve to a stored row.
///
/// Managers raise it wrapped in an [`anyhow::Error`]; the HTTP layer downcasts it back.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display(fmt = "{} with id {} not found", entity, id)]
pub struct NotFound {
    /// Table name of the missing entity.
    pub entity: &'static str,
    /// The id that didn't resolve.
    pub id: i64,
}

impl NotFound {
    /// Create a new not found error.
    #[must_use]
    pub const fn new(entity: &'static str, id: i64) -> Self {
        Self { entity, id }
    }
}

impl std::error::Error for NotFound {}

/// Read back an optional foreign key selected as `COALESCE(<column>, 0)`.
///
/// The `Any` driver can't decode `NULL` into an `Option`, so statements project missing
/// references to `0`. Ids start at 1, so `0` never names a row.
#[must_use]
pub const fn nullable_id(raw: i64) -> Option<i64> {
    if raw == 0 {
        None
    } else {
        Some(raw)
    }
}
