#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;

use snaplink::infrastructure::persistence::{MemoryClickStore, MemoryLinkStore, MemoryUserStore};
use snaplink::routes::app_router;
use snaplink::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-signing-secret";

// Minimum bcrypt cost keeps the suite fast.
const TEST_BCRYPT_COST: u32 = 4;

/// The app under test plus direct handles on its stores, for assertions
/// that peek behind the HTTP surface.
pub struct TestApp {
    pub server: TestServer,
    pub links: Arc<MemoryLinkStore>,
    pub clicks: Arc<MemoryClickStore>,
}

pub fn spawn_app() -> TestApp {
    let links = Arc::new(MemoryLinkStore::new());
    let clicks = Arc::new(MemoryClickStore::new());
    let users = Arc::new(MemoryUserStore::new());

    let state = AppState::new(
        links.clone(),
        clicks.clone(),
        users,
        TEST_JWT_SECRET.to_string(),
        3600,
        TEST_BCRYPT_COST,
    );

    TestApp {
        server: TestServer::new(app_router(state)).unwrap(),
        links,
        clicks,
    }
}

/// Registers an account and returns a bearer token for it.
pub async fn signup_and_login(server: &TestServer, name: &str, email: &str) -> String {
    let response = server
        .post("/signup")
        .json(&json!({ "name": name, "email": email, "password": "hunter22" }))
        .await;
    assert_eq!(response.status_code(), 201);

    let response = server
        .post("/login")
        .json(&json!({ "email": email, "password": "hunter22" }))
        .await;
    assert_eq!(response.status_code(), 200);

    response.json::<Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Shortens a URL, optionally as an authenticated owner, and returns the
/// slug.
pub async fn shorten(server: &TestServer, url: &str, token: Option<&str>) -> String {
    let mut request = server.post("/shorten").json(&json!({ "url": url }));

    if let Some(token) = token {
        request = request.add_header("Authorization", format!("Bearer {token}"));
    }

    let response = request.await;
    assert_eq!(response.status_code(), 201);

    response.json::<Value>()["slug"]
        .as_str()
        .unwrap()
        .to_string()
}
