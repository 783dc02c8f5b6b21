//! Handlers for the `/publishers` resource.
use actix_web::{web, HttpResponse};

use crate::db::models::publisher::{self, Draft};
use crate::server::errors::CatalogError;

use self::dto::{PublisherBriefDto, PublisherDto};
use super::{state::Global, utils::created};

/// Module that maps publishers to and from their transfer forms.
pub mod dto;

/// Path of the publisher collection.
pub const PATH: &str = "/publishers";

/// List every publisher in brief form.
#[tracing::instrument(skip(data))]
pub async fn list<T: Global + 'static>(data: web::Data<T>) -> Result<HttpResponse, CatalogError> {
    let publishers = publisher::Manager::find_all(data.db()).await?;
    let body: Vec<PublisherBriefDto> = publishers.iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Create a publisher that owns the publications named by id.
#[tracing::instrument(skip(data))]
pub async fn create<T: Global + 'static>(
    data: web::Data<T>,
    payload: web::Json<PublisherDto>,
) -> Result<HttpResponse, CatalogError> {
    let draft = Draft::from(payload.into_inner());
    let id = publisher::Manager::create(data.db(), &draft).await?;
    Ok(created(PATH, id))
}

/// Get one publisher in full form.
#[tracing::instrument(skip(data))]
pub async fn get<T: Global + 'static>(
    data: web::Data<T>,
    id: web::Path<i64>,
) -> Result<HttpResponse, CatalogError> {
    let detail = publisher::Manager::find_by_id(data.db(), id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PublisherDto::from(&detail)))
}

/// Replace a publisher and the set of publications it owns.
#[tracing::instrument(skip(data))]
pub async fn update<T: Global + 'static>(
    data: web::Data<T>,
    id: web::Path<i64>,
    payload: web::Json<PublisherDto>,
) -> Result<HttpResponse, CatalogError> {
    let draft = Draft::from(payload.into_inner());
    publisher::Manager::update(data.db(), id.into_inner(), &draft).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a publisher. Its publications stay, without a publisher.
#[tracing::instrument(skip(data))]
pub async fn delete<T: Global + 'static>(
    data: web::Data<T>,
    id: web::Path<i64>,
) -> Result<HttpResponse, CatalogError> {
    publisher::Manager::delete(data.db(), id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register the publisher routes.
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
