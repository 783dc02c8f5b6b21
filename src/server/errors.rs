//! Errors returned by the catalog endpoints.
use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use derive_more::Display;

use crate::db::models::NotFound;

/// Failure of a single catalog request.
#[derive(Debug, Display)]
pub enum CatalogError {
    /// The requested id, or one of the relation ids in the payload, doesn't exist.
    #[display(fmt = "{}", _0)]
    NotFound(NotFound),
    /// The payload is not a valid transfer form.
    #[display(fmt = "Malformed input: {}", _0)]
    MalformedInput(String),
    /// Anything the store reported that the caller can't fix.
    #[display(fmt = "Internal server error")]
    Internal(anyhow::Error),
}

impl std::error::Error for CatalogError {}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<NotFound>() {
            Ok(not_found) => Self::NotFound(not_found),
            Err(other) => Self::Internal(other),
        }
    }
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MalformedInput(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match *self {
            Self::Internal(ref err) => tracing::error!("Error: {err:?}"),
            Self::NotFound(_) | Self::MalformedInput(_) => tracing::debug!("{self}"),
        }
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

/// Turns a JSON body that doesn't deserialize into a [`CatalogError::MalformedInput`].
#[allow(
    clippy::needless_pass_by_value,
    reason = "Signature is dictated by `actix_web::web::JsonConfig::error_handler`"
)]
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    CatalogError::MalformedInput(err.to_string()).into()
}
