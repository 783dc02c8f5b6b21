//! Configuration file for the catalog server.
//!
//! Everything is optional. A minimal `catalog.toml` looks like:
//!
//! ```toml
//! [server]
//! port = 8080
//!
//! [database]
//! url = "sqlite://catalog.sqlite3?mode=rwc"
//! ```
use serde_derive::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;

/// Database url used when nothing else is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://catalog.sqlite3?mode=rwc";

/// Server configuration, read from `catalog.toml`.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server settings.
    #[serde(default)]
    pub server: Server,
    /// Database settings.
    #[serde(default)]
    pub database: Database,
}

/// `[server]` table.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Server {
    /// Address to bind to.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// `[database]` table.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Database {
    /// Connection url, overridden by `DATABASE_URL` and `--database-url`.
    pub url: Option<String>,
    /// Size of the connection pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
        }
    }
}

/// Loopback only.
fn default_bind() -> String {
    "127.0.0.1".to_owned()
}

/// Default HTTP port.
const fn default_port() -> u16 {
    8080
}

/// Default pool size.
const fn default_max_connections() -> u32 {
    50
}

impl Config {
    /// Read the config file at `path`. A missing file yields the defaults.
    ///
    /// # Errors
    /// Will error if the file exists but can't be read or isn't valid TOML.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at '{}', using defaults", path.display());
            return Ok(Self::default());
        }
        let config_str = read_to_string(path)?;
        let conf: Self = toml::from_str(&config_str)?;
        Ok(conf)
    }

    /// Pick the database url: command line first, then the environment, then this file.
    #[must_use]
    pub fn database_url(&self, cli_url: Option<String>, env_url: Option<String>) -> String {
        cli_url
            .or(env_url)
            .or_else(|| self.database.url.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned())
    }
}
