//! Serve the catalog API.
#![allow(
    clippy::exit,
    clippy::unused_async,
    clippy::infinite_loop,
    clippy::module_name_repetitions
)]
use crate::db;
use crate::server::api::state::App as AppState;
use crate::server::tracing::CatalogRootSpanBuilder;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, Error, HttpServer};

use std::{io, process};

use actix_http::body::MessageBody;
use actix_service::ServiceFactory;
use tracing_actix_web::TracingLogger;

use super::api::state::Global;
use crate::server::api::routes;

/// Where and how to serve the catalog.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind to.
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
    /// Database connection url.
    pub database_url: String,
    /// Size of the database connection pool.
    pub max_connections: u32,
}

/// Serve the catalog API.
#[actix_web::main]
pub async fn serve_catalog(options: ServeOptions) -> io::Result<()> {
    let ServeOptions {
        bind,
        port,
        database_url,
        max_connections,
    } = options;
    tracing::info!("Running catalog API on http://{bind}:{port}.");

    let db = match db::init::connect(&database_url, max_connections).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(
                "error: could not connect to database. Confirm that DATABASE_URL env var is set correctly."
            );
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        }
    };
    let state = AppState { db };

    HttpServer::new(move || init_app(&state))
        .bind((bind.as_str(), port))?
        .run()
        .await
}

/// Initialize the application and all possible routing at start-up time.
///
/// Every response allows any origin, method and header, and every request
/// runs inside a tracing span.
///
/// # Arguments
/// * `state` - The application state
pub fn init_app<T: Global + Clone + 'static>(
    state: &T,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
> {
    let app = App::new()
        .wrap(
            DefaultHeaders::new()
                .add(("Access-Control-Allow-Origin", "*"))
                .add(("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"))
                .add(("Access-Control-Allow-Headers", "*")),
        )
        .wrap(TracingLogger::<CatalogRootSpanBuilder>::new());
    routes::register_app(app, state)
}
