//! Handlers for the `/reviews` resource.
use actix_web::{web, HttpResponse};

use crate::db::models::review::{self, Draft};
use crate::server::errors::CatalogError;

use self::dto::{ReviewBriefDto, ReviewDto};
use super::{state::Global, utils::created};

/// Module that maps reviews to and from their transfer forms.
pub mod dto;

/// Path of the review collection.
pub const PATH: &str = "/reviews";

/// List every review in brief form.
#[tracing::instrument(skip(data))]
pub async fn list<T: Global + 'static>(data: web::Data<T>) -> Result<HttpResponse, CatalogError> {
    let reviews = review::Manager::find_all(data.db()).await?;
    let body: Vec<ReviewBriefDto> = reviews.iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Create a review of an existing publication.
#[tracing::instrument(skip(data))]
pub async fn create<T: Global + 'static>(
    data: web::Data<T>,
    payload: web::Json<ReviewDto>,
) -> Result<HttpResponse, CatalogError> {
    let draft = Draft::try_from(payload.into_inner())?;
    let id = review::Manager::create(data.db(), &draft).await?;
    Ok(created(PATH, id))
}

/// Get one review in full form.
#[tracing::instrument(skip(data))]
pub async fn get<T: Global + 'static>(
    data: web::Data<T>,
    id: web::Path<i64>,
) -> Result<HttpResponse, CatalogError> {
    let found = review::Manager::find_by_id(data.db(), id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ReviewDto::from(&found)))
}

/// Replace a review.
#[tracing::instrument(skip(data))]
pub async fn update<T: Global + 'static>(
    data: web::Data<T>,
    id: web::Path<i64>,
    payload: web::Json<ReviewDto>,
) -> Result<HttpResponse, CatalogError> {
    let draft = Draft::try_from(payload.into_inner())?;
    review::Manager::update(data.db(), id.into_inner(), &draft).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a review.
#[tracing::instrument(skip(data))]
pub async fn delete<T: Global + 'static>(
    data: web::Data<T>,
    id: web::Path<i64>,
) -> Result<HttpResponse, CatalogError> {
    review::Manager::delete(data.db(), id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register the review routes.
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
