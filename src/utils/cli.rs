//! Running the CLI

// Allow exits because in this file we ideally handle all errors with known exit codes
#![allow(clippy::exit)]

use crate::server::app::{serve_catalog, ServeOptions};
use crate::utils::config::Config;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Catalog is a REST API over authors, publications, publishers and reviews.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML config file. A missing file means defaults.
    #[arg(short, long, default_value_t = String::from("catalog.toml"))]
    config: String,
    /// Database connection url. Takes precedence over `DATABASE_URL` and the config file.
    #[arg(long)]
    database_url: Option<String>,
    /// Catalog cli subcommands
    #[command(subcommand)]
    subcommands: Subcommands,
}

/// Actions the catalog binary can run.
#[derive(Clone, clap::Subcommand)]
enum Subcommands {
    /// Serve the catalog REST API
    Serve {
        /// Port on which to serve the API. Defaults to the config file's, then 8080.
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind to. Defaults to the config file's, then 127.0.0.1.
        #[arg(short, long)]
        bind: Option<String>,
    },
}

/// Log at `info` unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Main entrypoint to application
///
/// # Errors
/// Errors if the server cannot bind to the requested address.
pub fn run() -> std::io::Result<()> {
    init_tracing();
    tracing::debug!("Starting application");
    let cli = Cli::parse();
    let config = match Config::load(Path::new(&cli.config)) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("error: could not read config file `{}`", &cli.config);
            tracing::error!("Error: {:?}", err);
            std::process::exit(1);
        }
    };
    let database_url = config.database_url(cli.database_url, std::env::var("DATABASE_URL").ok());

    match cli.subcommands {
        Subcommands::Serve { port, bind } => serve_catalog(ServeOptions {
            bind: bind.unwrap_or(config.server.bind),
            port: port.unwrap_or(config.server.port),
            database_url,
            max_connections: config.database.max_connections,
        }),
    }
}
