//! Tracing/logging for HTTP servers

use std::time::Instant;

use actix_web::{
    dev::{ServiceRequest, ServiceResponse},
    HttpMessage,
};
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};

/// The length of time in milliseconds after which a request is considered slow
const SLOW_REQUEST_MS: u128 = 5 * 1000;

/// `DefaultRootSpanBuilder` plus the catalog resource and request timings
pub struct CatalogRootSpanBuilder;

/// Catalog collection a request path addresses, e.g. `authors` for `/authors/3`.
///
/// Empty for the root path.
fn resource_of(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or_default()
}

/// For measuring the duration of a request
struct RequestStart(Instant);

impl RootSpanBuilder for CatalogRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> tracing::Span {
        // Scoped so the mutable borrow of the extensions ends before `root_span!` borrows `request`.
        {
            let mut request_extensions = request.extensions_mut();
            request_extensions.insert(RequestStart(Instant::now()));
        }

        // Every `tracing::*` call made while handling the request is attached to this span,
        // along with its method, path, `request_id` and catalog resource.
        tracing_actix_web::root_span!(
            request,
            resource = resource_of(request.path()),
            duration_ms = tracing::field::Empty,
            duration_ns = tracing::field::Empty,
        )
    }

    fn on_request_end<B: actix_web::body::MessageBody>(
        span: tracing::Span,
        outcome: &Result<ServiceResponse<B>, actix_web::Error>,
    ) {
        let () = outcome.as_ref().map_or((), |response| {
            if let Some(req_start) = response.request().extensions().get::<RequestStart>() {
                let elapsed = req_start.0.elapsed();
                let millis = elapsed.as_millis();
                span.record("duration_ms", millis);
                span.record("duration_ns", elapsed.as_nanos());
                if millis > SLOW_REQUEST_MS {
                    let resource = resource_of(response.request().path());
                    tracing::warn!(duration_ms = millis, resource, "Slow catalog request");
                } else {
                    tracing::trace!("HTTP Request");
                }
            }
        });
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}
