use crate::common;
use actix_web::{http::StatusCode, test};
use serde_json::json;

#[actix_web::test]
async fn test_get_publisher_with_no_publications_expect_empty_ids() {
    let (app, _td) = common::initialize_app().await;
    let id = common::create(
        &app,
        "/publishers",
        &json!({"name": "Acme", "email": "a@x.com", "publicationsIds": []}),
    )
    .await;
    let actual = common::get_json(&app, &format!("/publishers/{id}")).await;
    let expected = json!({"name": "Acme", "email": "a@x.com", "publicationsIds": []});
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_delete_seventh_author_expect_absent_from_third_publication() {
    let (app, _td) = common::initialize_app().await;
    let mut authors = Vec::new();
    for idx in 1..=7 {
        let name = format!("Author {idx}");
        authors.push(common::create(&app, "/authors", &json!({"name": name, "biography": "b"})).await);
    }
    for idx in 1..=3 {
        common::create(
            &app,
            "/publications",
            &json!({"title": format!("Volume {idx}"), "description": "d", "authorsIds": [1, 7]}),
        )
        .await;
    }
    assert_eq!(authors.last(), Some(&7));

    let resp = common::delete(&app, "/authors/7").await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let actual = common::get_json(&app, "/publications/3").await;
    assert_eq!(actual["authorsIds"], json!([1]));
}

#[actix_web::test]
async fn test_recreate_from_full_form_expect_equal_full_form() {
    let (app, _td) = common::initialize_app().await;
    let author = common::create(&app, "/authors", &json!({"name": "A", "biography": "a"})).await;
    let publisher = common::create(&app, "/publishers", &json!({"name": "P", "email": "p@x.com"})).await;
    let id = common::create(
        &app,
        "/publications",
        &json!({
            "title": "T",
            "description": "D",
            "authorsIds": [author, author],
            "publisherId": publisher
        }),
    )
    .await;
    let original = common::get_json(&app, &format!("/publications/{id}")).await;

    let copy = common::create(&app, "/publications", &original).await;
    assert_ne!(copy, id);
    let actual = common::get_json(&app, &format!("/publications/{copy}")).await;
    assert_eq!(actual, original);

    let review = common::create(
        &app,
        "/reviews",
        &json!({"reviewerName": "R", "isPositive": true, "comment": "c", "publicationId": id}),
    )
    .await;
    let original = common::get_json(&app, &format!("/reviews/{review}")).await;
    let copy = common::create(&app, "/reviews", &original).await;
    let actual = common::get_json(&app, &format!("/reviews/{copy}")).await;
    assert_eq!(actual, original);
}

#[actix_web::test]
async fn test_any_response_expect_cors_headers() {
    let (app, _td) = common::initialize_app().await;
    let resp = common::get(&app, "/authors").await;
    let actual = resp
        .headers()
        .get("Access-Control-Allow-Origin")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(actual, "*");

    let resp = common::get(&app, "/authors/1").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().contains_key("Access-Control-Allow-Origin"));
}

#[actix_web::test]
async fn test_not_found_expect_message_naming_entity() {
    let (app, _td) = common::initialize_app().await;
    let resp = common::get(&app, "/reviews/5").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    let actual = std::str::from_utf8(&body).unwrap();
    assert_eq!(actual, "review with id 5 not found");
}

#[actix_web::test]
async fn test_request_with_non_numeric_id_expect_client_error() {
    let (app, _td) = common::initialize_app().await;
    let resp = common::get(&app, "/authors/seven").await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn test_request_with_unknown_path_expect_not_found() {
    let (app, _td) = common::initialize_app().await;
    let resp = common::get(&app, "/magazines").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
