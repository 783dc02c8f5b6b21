//! A central place to register App routes.
use actix_service::ServiceFactory;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    web, App, Error,
};

use super::{authors, publications, publishers, reviews, state::Global};
use crate::server::errors::json_error_handler;

/// Central place to register all the App routing.
///
/// Every entity gets a collection resource (`GET` list, `POST` create) and an
/// item resource (`GET`, `PUT`, `DELETE` by id).
#[tracing::instrument(skip(app, state))]
pub fn register_app<
    T: Global + Clone + 'static,
    U: MessageBody,
    V: ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<U>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
>(
    app: App<V>,
    state: &T,
) -> App<V> {
    app
        .app_data(web::Data::new(state.clone()))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(authors::register::<T>)
        .configure(publications::register::<T>)
        .configure(publishers::register::<T>)
        .configure(reviews::register::<T>)
}
