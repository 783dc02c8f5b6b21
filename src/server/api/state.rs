//! Centralized state management for the Actix web server
use crate::db;

/// Global, read-only state
pub trait Global {
    /// Database connection
    fn db(&self) -> &db::DatabaseConnection;
}

/// Application state
#[derive(Debug, Clone)]
pub struct App {
    /// Database connection
    pub db: db::DatabaseConnection,
}

impl Global for App {
    fn db(&self) -> &db::DatabaseConnection {
        &self.db
    }
}
