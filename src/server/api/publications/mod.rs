//! Handlers for the `/publications` resource.
use actix_web::{web, HttpResponse};

use crate::db::models::publication::{self, Draft};
use crate::server::errors::CatalogError;

use self::dto::{PublicationBriefDto, PublicationDto};
use super::{state::Global, utils::created};

/// Module that maps publications to and from their transfer forms.
pub mod dto;

/// Path of the publication collection.
pub const PATH: &str = "/publications";

/// List every publication in brief form.
#[tracing::instrument(skip(data))]
pub async fn list<T: Global + 'static>(data: web::Data<T>) -> Result<HttpResponse, CatalogError> {
    let publications = publication::Manager::find_all(data.db()).await?;
    let body: Vec<PublicationBriefDto> = publications.iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Create a publication, linking the authors, reviews and publisher named by id.
#[tracing::instrument(skip(data))]
pub async fn create<T: Global + 'static>(
    data: web::Data<T>,
    payload: web::Json<PublicationDto>,
) -> Result<HttpResponse, CatalogError> {
    let draft = Draft::from(payload.into_inner());
    let id = publication::Manager::create(data.db(), &draft).await?;
    Ok(created(PATH, id))
}

/// Get one publication in full form.
#[tracing::instrument(skip(data))]
pub async fn get<T: Global + 'static>(
    data: web::Data<T>,
    id: web::Path<i64>,
) -> Result<HttpResponse, CatalogError> {
    let detail = publication::Manager::find_by_id(data.db(), id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PublicationDto::from(&detail)))
}

/// Replace a publication and all of its relations.
#[tracing::instrument(skip(data))]
pub async fn update<T: Global + 'static>(
    data: web::Data<T>,
    id: web::Path<i64>,
    payload: web::Json<PublicationDto>,
) -> Result<HttpResponse, CatalogError> {
    let draft = Draft::from(payload.into_inner());
    publication::Manager::update(data.db(), id.into_inner(), &draft).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a publication. Its reviews stay, without a publication.
#[tracing::instrument(skip(data))]
pub async fn delete<T: Global + 'static>(
    data: web::Data<T>,
    id: web::Path<i64>,
) -> Result<HttpResponse, CatalogError> {
    publication::Manager::delete(data.db(), id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register the publication routes.
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
