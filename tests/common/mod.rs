#![allow(dead_code)]

use axum::http::{HeaderValue, header::COOKIE};
use axum_test::{TestRequest, TestResponse, TestServer};
use chrono::TimeDelta;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use visit_dashboard::api::cookies::SESSION_COOKIE;
use visit_dashboard::application::services::{AuthService, VisitService};
use visit_dashboard::infrastructure::persistence::{InMemorySessionRepository, JsonVisitRepository};
use visit_dashboard::infrastructure::security::{DEMO_USERS, seed_credentials};
use visit_dashboard::routes::app_router;
use visit_dashboard::state::AppState;

pub fn visits_file(dir: &Path) -> PathBuf {
    dir.join("data").join("visits.json")
}

pub async fn create_test_state(dir: &Path) -> AppState {
    create_test_state_with_ttl(dir, TimeDelta::hours(1)).await
}

pub async fn create_test_state_with_ttl(dir: &Path, ttl: TimeDelta) -> AppState {
    let visit_repo = Arc::new(JsonVisitRepository::init(visits_file(dir)).await.unwrap());
    let visit_service = Arc::new(VisitService::load(visit_repo).await);

    let credentials = Arc::new(seed_credentials(&DEMO_USERS).unwrap());
    let auth_service = Arc::new(AuthService::new(
        Arc::new(InMemorySessionRepository::new()),
        credentials,
        "test-signing-secret".to_string(),
        ttl,
    ));

    AppState::new(visit_service, auth_service, false)
}

/// Full application router serving static files from `<dir>/public`.
pub fn create_test_server(state: AppState, dir: &Path) -> TestServer {
    let static_dir = dir.join("public");
    std::fs::create_dir_all(static_dir.join("css")).unwrap();
    std::fs::write(static_dir.join("css").join("app.css"), "body {}").unwrap();
    std::fs::write(static_dir.join("about.html"), "<h1>about</h1>").unwrap();

    TestServer::new(app_router(state, static_dir)).unwrap()
}

/// Extracts `visit_session=<value>` from a `Set-Cookie` response header.
pub fn session_cookie_pair(response: &TestResponse) -> String {
    let header = response.header("set-cookie");
    let raw = header.to_str().unwrap();
    let pair = raw.split(';').next().unwrap().trim().to_string();
    assert!(pair.starts_with(&format!("{SESSION_COOKIE}=")));
    pair
}

pub fn with_cookie(request: TestRequest, cookie: &str) -> TestRequest {
    request.add_header(COOKIE, HeaderValue::from_str(cookie).unwrap())
}

/// Signs in and returns the cookie pair to send on later requests.
pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/login")
        .json(&json!({ "username": username, "password": password }))
        .await;

    response.assert_status_ok();
    session_cookie_pair(&response)
}
