mod common;

use axum::http::StatusCode;
use chrono::{TimeDelta, Utc};

fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[tokio::test]
async fn test_visits_requires_session() {
    let dir = tempfile::tempdir().unwrap();
    let state = common::create_test_state(dir.path()).await;
    let server = common::create_test_server(state, dir.path());

    let response = server.get("/api/visits").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unauthorized");
}

#[tokio::test]
async fn test_stats_requires_session() {
    let dir = tempfile::tempdir().unwrap();
    let state = common::create_test_state(dir.path()).await;
    let server = common::create_test_server(state, dir.path());

    let response = server.get("/api/stats").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_visits_returns_raw_record() {
    let dir = tempfile::tempdir().unwrap();
    let state = common::create_test_state(dir.path()).await;
    let server = common::create_test_server(state.clone(), dir.path());

    for _ in 0..3 {
        state.visit_service.record_visit().await.unwrap();
    }
    let cookie = common::login(&server, "admin", "admin123").await;

    let response = common::with_cookie(server.get("/api/visits"), &cookie).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 3);
    assert_eq!(json["daily"][today()], 3);
    assert_eq!(json["daily"].as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_stats_returns_seven_days_ending_today() {
    let dir = tempfile::tempdir().unwrap();
    let state = common::create_test_state(dir.path()).await;
    let server = common::create_test_server(state.clone(), dir.path());

    let two_days_ago = Utc::now().date_naive() - TimeDelta::days(2);
    state.visit_service.record_visit_on(two_days_ago).await.unwrap();
    state.visit_service.record_visit().await.unwrap();
    let cookie = common::login(&server, "admin", "admin123").await;

    let response = common::with_cookie(server.get("/api/stats"), &cookie).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 2);

    let days = json["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[6]["date"], today());
    assert_eq!(days[6]["count"], 1);
    assert_eq!(days[4]["date"], two_days_ago.format("%Y-%m-%d").to_string());
    assert_eq!(days[4]["count"], 1);

    let dates: Vec<&str> = days.iter().map(|d| d["date"].as_str().unwrap()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);

    for day in days {
        assert!(day["label"].as_str().unwrap().contains(' '));
    }
}

#[tokio::test]
async fn test_visits_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    let state = common::create_test_state(dir.path()).await;
    state.visit_service.record_visit().await.unwrap();
    state.visit_service.record_visit().await.unwrap();
    drop(state);

    let state = common::create_test_state(dir.path()).await;
    let visits = state.visit_service.get_visits().await;

    assert_eq!(visits.total, 2);
    assert_eq!(visits.daily.get(&today()), Some(&2));
}

#[tokio::test]
async fn test_corrupt_file_starts_from_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::visits_file(dir.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "this is not json").unwrap();

    let state = common::create_test_state(dir.path()).await;
    assert_eq!(state.visit_service.get_visits().await.total, 0);

    state.visit_service.record_visit().await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["total"], 1);
}

#[tokio::test]
async fn test_page_load_at_max_total_is_served() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::visits_file(dir.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, format!(r#"{{"total": {}, "daily": {{}}}}"#, u64::MAX)).unwrap();

    let state = common::create_test_state(dir.path()).await;
    let server = common::create_test_server(state.clone(), dir.path());

    server.get("/login").await.assert_status_ok();

    let record = state.visit_service.get_visits().await;
    assert_eq!(record.total, u64::MAX);
    assert_eq!(record.daily.values().sum::<u64>(), 1);
}
