//! Utility functions and the CLI entrypoint.
pub mod cli;
pub mod config;
