//! Handlers for the `/authors` resource.
use actix_web::{web, HttpResponse};

use crate::db::models::author::{self, Draft};
use crate::server::errors::CatalogError;

use self::dto::{AuthorBriefDto, AuthorDto};
use super::{state::Global, utils::created};

/// Module that maps authors to and from their transfer forms.
pub mod dto;

/// Path of the author collection.
pub const PATH: &str = "/authors";

/// List every author in brief form.
#[tracing::instrument(skip(data))]
pub async fn list<T: Global + 'static>(data: web::Data<T>) -> Result<HttpResponse, CatalogError> {
    let authors = author::Manager::find_all(data.db()).await?;
    let body: Vec<AuthorBriefDto> = authors.iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Create an author.
#[tracing::instrument(skip(data))]
pub async fn create<T: Global + 'static>(
    data: web::Data<T>,
    payload: web::Json<AuthorDto>,
) -> Result<HttpResponse, CatalogError> {
    let draft = Draft::from(payload.into_inner());
    let id = author::Manager::create(data.db(), &draft).await?;
    Ok(created(PATH, id))
}

/// Get one author in full form.
#[tracing::instrument(skip(data))]
pub async fn get<T: Global + 'static>(
    data: web::Data<T>,
    id: web::Path<i64>,
) -> Result<HttpResponse, CatalogError> {
    let found = author::Manager::find_by_id(data.db(), id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(AuthorDto::from(&found)))
}

/// Replace an author.
#[tracing::instrument(skip(data))]
pub async fn update<T: Global + 'static>(
    data: web::Data<T>,
    id: web::Path<i64>,
    payload: web::Json<AuthorDto>,
) -> Result<HttpResponse, CatalogError> {
    let draft = Draft::from(payload.into_inner());
    author::Manager::update(data.db(), id.into_inner(), &draft).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete an author. Publications that listed it keep existing.
#[tracing::instrument(skip(data))]
pub async fn delete<T: Global + 'static>(
    data: web::Data<T>,
    id: web::Path<i64>,
) -> Result<HttpResponse, CatalogError> {
    author::Manager::delete(data.db(), id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register the author routes.
pub fn register<T: Global + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(PATH)
            .route(web::get().to(list::<T>))
            .route(web::post().to(create::<T>)),
    )
    .service(
        web::resource(format!("{PATH}/{{id}}"))
            .route(web::get().to(get::<T>))
            .route(web::put().to(update::<T>))
            .route(web::delete().to(delete::<T>)),
    );
}
