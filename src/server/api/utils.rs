//! Utils shared by all catalog endpoints
use actix_web::{http::header, HttpResponse};

/// `201 Created` response pointing at the new resource, e.g. `Location: /authors/3`.
#[must_use]
pub fn created(collection_path: &str, id: i64) -> HttpResponse {
    HttpResponse::Created()
        .insert_header((header::LOCATION, format!("{collection_path}/{id}")))
        .finish()
}
