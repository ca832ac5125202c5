mod common;

use serde_json::{Value, json};
use std::collections::HashSet;

use snaplink::utils::slug::is_well_formed;

#[tokio::test]
async fn test_shorten_returns_slug_and_id() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body = response.json::<Value>();
    assert!(body["_id"].is_i64());

    let slug = body["slug"].as_str().unwrap();
    assert!(is_well_formed(slug), "unexpected slug shape: {slug}");
}

#[tokio::test]
async fn test_shorten_slug_resolves_to_original_url() {
    let app = common::spawn_app();

    let slug = common::shorten(&app.server, "https://example.com/some/path?q=1", None).await;

    let response = app.server.get(&format!("/{slug}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://example.com/some/path?q=1"
    );
}

#[tokio::test]
async fn test_shorten_missing_url_is_validation_error() {
    let app = common::spawn_app();

    let response = app.server.post("/shorten").json(&json!({})).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_empty_url_is_validation_error() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/shorten")
        .json(&json!({ "url": "" }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_generates_distinct_slugs() {
    let app = common::spawn_app();

    let mut slugs = HashSet::new();
    for _ in 0..20 {
        slugs.insert(common::shorten(&app.server, "https://example.com", None).await);
    }

    assert_eq!(slugs.len(), 20);
}

#[tokio::test]
async fn test_shorten_with_token_sets_owner() {
    let app = common::spawn_app();
    let token = common::signup_and_login(&app.server, "Ada", "ada@example.com").await;

    let slug = common::shorten(&app.server, "https://example.com", Some(&token)).await;

    let response = app
        .server
        .get("/my-urls")
        .add_header("Authorization", format!("Bearer {token}"))
        .await;

    assert_eq!(response.status_code(), 200);

    let body = response.json::<Value>();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["slug"], slug.as_str());
}

#[tokio::test]
async fn test_shorten_without_token_is_anonymous() {
    let app = common::spawn_app();
    let token = common::signup_and_login(&app.server, "Ada", "ada@example.com").await;

    common::shorten(&app.server, "https://example.com", None).await;

    // the anonymous link belongs to nobody
    let response = app
        .server
        .get("/my-urls")
        .add_header("Authorization", format!("Bearer {token}"))
        .await;

    assert_eq!(response.status_code(), 404);
}
