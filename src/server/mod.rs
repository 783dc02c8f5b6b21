//! Functionality for serving the catalog over HTTP.

pub mod api;
pub mod app;
pub mod errors;
pub mod tracing;
