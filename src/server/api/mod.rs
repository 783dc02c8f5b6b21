//! This module contains the API endpoints for the server.
pub mod authors;
pub mod publications;
pub mod publishers;
pub mod reviews;
pub mod routes;
pub mod state;
pub mod utils;
