use actix_http::{body::MessageBody, Request};
use actix_service::Service;
use actix_web::{
    dev::ServiceResponse,
    http::{header, StatusCode},
    test, Error,
};
use serde_json::Value;
use tempfile::TempDir;

use catalog::db::{init::connect, DatabaseConnection};
use catalog::server::{api::state::App as AppState, app::init_app};

/// Sqlite url for a fresh database file inside `td`.
pub fn sqlite_url(td: &TempDir) -> String {
    format!(
        "sqlite://{}?mode=rwc",
        td.path().join("catalog.sqlite3").display()
    )
}

/// A migrated database that lives as long as the returned `TempDir`.
pub async fn initialize_db() -> (DatabaseConnection, TempDir) {
    let td = tempfile::tempdir().unwrap();
    let db = connect(&sqlite_url(&td), 5).await.unwrap();
    (db, td)
}

pub async fn initialize_app() -> (
    impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error>,
    TempDir,
) {
    let (db, td) = initialize_db().await;
    let state = AppState { db };
    let app = test::init_service(init_app(&state)).await;
    (app, td)
}

pub async fn get<S, B>(app: &S, uri: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::get().uri(uri).to_request();
    test::call_service(app, req).await
}

pub async fn get_json<S, B>(app: &S, uri: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let resp = get(app, uri).await;
    assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
    test::read_body_json(resp).await
}

pub async fn post<S, B>(app: &S, uri: &str, body: &Value) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

/// POST `body` and return the id of the created resource.
pub async fn create<S, B>(app: &S, uri: &str, body: &Value) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let resp = post(app, uri, body).await;
    assert_eq!(resp.status(), StatusCode::CREATED, "POST {uri} {body}");
    created_id(&resp)
}

pub async fn put<S, B>(app: &S, uri: &str, body: &Value) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::put()
        .uri(uri)
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

pub async fn delete<S, B>(app: &S, uri: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::delete().uri(uri).to_request();
    test::call_service(app, req).await
}

/// Id at the end of the `Location` header of a `201 Created` response.
pub fn created_id<B>(resp: &ServiceResponse<B>) -> i64 {
    let location = resp
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    location.rsplit('/').next().unwrap().parse().unwrap()
}
