use crate::common;
use actix_web::http::StatusCode;
use serde_json::json;

#[actix_web::test]
async fn test_create_publisher_then_get_expect_same_fields() {
    let (app, _td) = common::initialize_app().await;
    let input = json!({"name": "Acme", "email": "a@acme.io", "publicationsIds": []});
    let id = common::create(&app, "/publishers", &input).await;
    let actual = common::get_json(&app, &format!("/publishers/{id}")).await;
    assert_eq!(actual, input);
}

#[actix_web::test]
async fn test_create_publisher_with_publications_expect_publications_assigned() {
    let (app, _td) = common::initialize_app().await;
    let first = common::create(&app, "/publications", &json!({"title": "One", "description": "1"})).await;
    let second = common::create(&app, "/publications", &json!({"title": "Two", "description": "2"})).await;
    let id = common::create(
        &app,
        "/publishers",
        &json!({"name": "Acme", "email": "a@acme.io", "publicationsIds": [second, first, second]}),
    )
    .await;

    let actual = common::get_json(&app, &format!("/publishers/{id}")).await;
    assert_eq!(actual["publicationsIds"], json!([first, second]));
    let actual = common::get_json(&app, &format!("/publications/{first}")).await;
    assert_eq!(actual["publisherId"], json!(id));
}

#[actix_web::test]
async fn test_create_publisher_when_publication_missing_expect_not_found_and_nothing_stored() {
    let (app, _td) = common::initialize_app().await;
    let resp = common::post(
        &app,
        "/publishers",
        &json!({"name": "Acme", "email": "a@acme.io", "publicationsIds": [12]}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let actual = common::get_json(&app, "/publishers").await;
    assert_eq!(actual, json!([]));
}

#[actix_web::test]
async fn test_list_publishers_expect_brief_forms() {
    let (app, _td) = common::initialize_app().await;
    let id = common::create(&app, "/publishers", &json!({"name": "Acme", "email": "a@acme.io"})).await;
    let actual = common::get_json(&app, "/publishers").await;
    let expected = json!([{"id": id, "name": "Acme", "email": "a@acme.io"}]);
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_update_publisher_expect_publications_replaced() {
    let (app, _td) = common::initialize_app().await;
    let first = common::create(&app, "/publications", &json!({"title": "One", "description": "1"})).await;
    let second = common::create(&app, "/publications", &json!({"title": "Two", "description": "2"})).await;
    let id = common::create(
        &app,
        "/publishers",
        &json!({"name": "Acme", "email": "a@acme.io", "publicationsIds": [first]}),
    )
    .await;

    let resp = common::put(
        &app,
        &format!("/publishers/{id}"),
        &json!({"name": "Acme Press", "email": "press@acme.io", "publicationsIds": [second]}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let actual = common::get_json(&app, &format!("/publishers/{id}")).await;
    let expected = json!({
        "name": "Acme Press",
        "email": "press@acme.io",
        "publicationsIds": [second]
    });
    assert_eq!(actual, expected);
    let actual = common::get_json(&app, &format!("/publications/{first}")).await;
    assert_eq!(actual["publisherId"], json!(null));
}

#[actix_web::test]
async fn test_update_publisher_when_never_created_expect_not_found() {
    let (app, _td) = common::initialize_app().await;
    let resp = common::put(&app, "/publishers/4", &json!({"name": "N", "email": "e"})).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_publisher_expect_publications_kept_without_publisher() {
    let (app, _td) = common::initialize_app().await;
    let first = common::create(&app, "/publications", &json!({"title": "One", "description": "1"})).await;
    let second = common::create(&app, "/publications", &json!({"title": "Two", "description": "2"})).await;
    let id = common::create(
        &app,
        "/publishers",
        &json!({"name": "Acme", "email": "a@acme.io", "publicationsIds": [first, second]}),
    )
    .await;

    let resp = common::delete(&app, &format!("/publishers/{id}")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = common::get(&app, &format!("/publishers/{id}")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    for publication in [first, second] {
        let actual = common::get_json(&app, &format!("/publications/{publication}")).await;
        assert_eq!(actual["publisherId"], json!(null));
    }
    let actual = common::get_json(&app, "/publications").await;
    assert_eq!(actual.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_delete_publisher_when_never_created_expect_not_found() {
    let (app, _td) = common::initialize_app().await;
    let resp = common::delete(&app, "/publishers/1").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
