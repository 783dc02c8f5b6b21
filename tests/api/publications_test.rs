use crate::common;
use actix_web::http::StatusCode;
use serde_json::json;

#[actix_web::test]
async fn test_create_publication_with_relations_then_get_expect_same_ids() {
    let (app, _td) = common::initialize_app().await;
    let author = common::create(&app, "/authors", &json!({"name": "A", "biography": "a"})).await;
    let publisher = common::create(
        &app,
        "/publishers",
        &json!({"name": "Acme", "email": "acme@example.com"}),
    )
    .await;
    let input = json!({
        "title": "Rust in Action",
        "description": "Systems programming.",
        "authorsIds": [author],
        "reviewsIds": [],
        "publisherId": publisher
    });
    let id = common::create(&app, "/publications", &input).await;
    let actual = common::get_json(&app, &format!("/publications/{id}")).await;
    assert_eq!(actual, input);
}

#[actix_web::test]
async fn test_create_publication_without_relations_expect_empty_and_null() {
    let (app, _td) = common::initialize_app().await;
    let id = common::create(
        &app,
        "/publications",
        &json!({"title": "Standalone", "description": "No ties."}),
    )
    .await;
    let actual = common::get_json(&app, &format!("/publications/{id}")).await;
    let expected = json!({
        "title": "Standalone",
        "description": "No ties.",
        "authorsIds": [],
        "reviewsIds": [],
        "publisherId": null
    });
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_create_publication_when_author_missing_expect_not_found_and_nothing_stored() {
    let (app, _td) = common::initialize_app().await;
    let author = common::create(&app, "/authors", &json!({"name": "A", "biography": "a"})).await;
    let resp = common::post(
        &app,
        "/publications",
        &json!({"title": "T", "description": "D", "authorsIds": [author, 999]}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let actual = common::get_json(&app, "/publications").await;
    assert_eq!(actual, json!([]));
}

#[actix_web::test]
async fn test_create_publication_when_publisher_missing_expect_not_found() {
    let (app, _td) = common::initialize_app().await;
    let resp = common::post(
        &app,
        "/publications",
        &json!({"title": "T", "description": "D", "publisherId": 5}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let actual = common::get_json(&app, "/publications").await;
    assert_eq!(actual, json!([]));
}

#[actix_web::test]
async fn test_create_publication_when_duplicate_authors_expect_duplicates_kept() {
    let (app, _td) = common::initialize_app().await;
    let first = common::create(&app, "/authors", &json!({"name": "A", "biography": "a"})).await;
    let second = common::create(&app, "/authors", &json!({"name": "B", "biography": "b"})).await;
    let id = common::create(
        &app,
        "/publications",
        &json!({
            "title": "T",
            "description": "D",
            "authorsIds": [second, first, second]
        }),
    )
    .await;
    let actual = common::get_json(&app, &format!("/publications/{id}")).await;
    assert_eq!(actual["authorsIds"], json!([second, first, second]));
}

#[actix_web::test]
async fn test_create_publication_with_existing_review_expect_review_moved() {
    let (app, _td) = common::initialize_app().await;
    let old = common::create(&app, "/publications", &json!({"title": "Old", "description": "o"})).await;
    let review = common::create(
        &app,
        "/reviews",
        &json!({"reviewerName": "R", "isPositive": true, "comment": "c", "publicationId": old}),
    )
    .await;
    let new = common::create(
        &app,
        "/publications",
        &json!({"title": "New", "description": "n", "reviewsIds": [review]}),
    )
    .await;

    let actual = common::get_json(&app, &format!("/reviews/{review}")).await;
    assert_eq!(actual["publicationId"], json!(new));
    let actual = common::get_json(&app, &format!("/publications/{old}")).await;
    assert_eq!(actual["reviewsIds"], json!([]));
}

#[actix_web::test]
async fn test_list_publications_expect_brief_forms() {
    let (app, _td) = common::initialize_app().await;
    let id = common::create(
        &app,
        "/publications",
        &json!({"title": "T", "description": "D", "publisherId": null}),
    )
    .await;
    let actual = common::get_json(&app, "/publications").await;
    let expected = json!([{"id": id, "title": "T", "description": "D"}]);
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_update_publication_when_relations_omitted_expect_relations_cleared() {
    let (app, _td) = common::initialize_app().await;
    let author = common::create(&app, "/authors", &json!({"name": "A", "biography": "a"})).await;
    let publisher = common::create(
        &app,
        "/publishers",
        &json!({"name": "P", "email": "p@example.com"}),
    )
    .await;
    let id = common::create(
        &app,
        "/publications",
        &json!({
            "title": "T",
            "description": "D",
            "authorsIds": [author],
            "publisherId": publisher
        }),
    )
    .await;
    let review = common::create(
        &app,
        "/reviews",
        &json!({"reviewerName": "R", "isPositive": false, "comment": "meh", "publicationId": id}),
    )
    .await;

    let resp = common::put(
        &app,
        &format!("/publications/{id}"),
        &json!({"title": "T2", "description": "D2"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let actual = common::get_json(&app, &format!("/publications/{id}")).await;
    let expected = json!({
        "title": "T2",
        "description": "D2",
        "authorsIds": [],
        "reviewsIds": [],
        "publisherId": null
    });
    assert_eq!(actual, expected);

    let actual = common::get_json(&app, &format!("/reviews/{review}")).await;
    assert_eq!(actual["publicationId"], json!(null));
    let actual = common::get_json(&app, &format!("/publishers/{publisher}")).await;
    assert_eq!(actual["publicationsIds"], json!([]));
    let resp = common::get(&app, &format!("/authors/{author}")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_update_publication_replaces_authors() {
    let (app, _td) = common::initialize_app().await;
    let first = common::create(&app, "/authors", &json!({"name": "A", "biography": "a"})).await;
    let second = common::create(&app, "/authors", &json!({"name": "B", "biography": "b"})).await;
    let id = common::create(
        &app,
        "/publications",
        &json!({"title": "T", "description": "D", "authorsIds": [first]}),
    )
    .await;
    let resp = common::put(
        &app,
        &format!("/publications/{id}"),
        &json!({"title": "T", "description": "D", "authorsIds": [second, second]}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let actual = common::get_json(&app, &format!("/publications/{id}")).await;
    assert_eq!(actual["authorsIds"], json!([second, second]));
}

#[actix_web::test]
async fn test_update_publication_when_review_missing_expect_not_found_and_unchanged() {
    let (app, _td) = common::initialize_app().await;
    let author = common::create(&app, "/authors", &json!({"name": "A", "biography": "a"})).await;
    let input = json!({
        "title": "T",
        "description": "D",
        "authorsIds": [author],
        "reviewsIds": [],
        "publisherId": null
    });
    let id = common::create(&app, "/publications", &input).await;
    let resp = common::put(
        &app,
        &format!("/publications/{id}"),
        &json!({"title": "Changed", "description": "D", "reviewsIds": [77]}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let actual = common::get_json(&app, &format!("/publications/{id}")).await;
    assert_eq!(actual, input);
}

#[actix_web::test]
async fn test_update_publication_when_never_created_expect_not_found() {
    let (app, _td) = common::initialize_app().await;
    let resp = common::put(
        &app,
        "/publications/3",
        &json!({"title": "T", "description": "D"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_publication_expect_review_kept_with_null_publication() {
    let (app, _td) = common::initialize_app().await;
    let author = common::create(&app, "/authors", &json!({"name": "A", "biography": "a"})).await;
    let id = common::create(
        &app,
        "/publications",
        &json!({"title": "T", "description": "D", "authorsIds": [author]}),
    )
    .await;
    let review = common::create(
        &app,
        "/reviews",
        &json!({"reviewerName": "R", "isPositive": true, "comment": "good", "publicationId": id}),
    )
    .await;

    let resp = common::delete(&app, &format!("/publications/{id}")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = common::get(&app, &format!("/publications/{id}")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let actual = common::get_json(&app, &format!("/reviews/{review}")).await;
    let expected = json!({
        "reviewerName": "R",
        "isPositive": true,
        "comment": "good",
        "publicationId": null
    });
    assert_eq!(actual, expected);
    let resp = common::get(&app, &format!("/authors/{author}")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_delete_publication_when_never_created_expect_not_found() {
    let (app, _td) = common::initialize_app().await;
    let resp = common::delete(&app, "/publications/1").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
