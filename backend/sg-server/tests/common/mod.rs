#![allow(dead_code)]

//! Test infrastructure for sg-server API tests

use sg_config::CorsConfig;
use sg_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Create AppState backed by a fresh in-memory database
pub async fn create_test_app_state() -> AppState {
    let pool = sg_db::create_pool_from_url("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    sg_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    AppState::new(pool)
}

pub fn create_test_router(state: &AppState) -> Router {
    build_router(state.clone(), &CorsConfig::default())
}

/// Send a request and decode the JSON response (Null for empty/non-JSON bodies)
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Three valid goals, one of each type
pub fn three_goals() -> Value {
    json!([
        { "description": "Ship the login page", "type": "Live" },
        { "description": "Harden the payments API", "type": "QA Complete" },
        { "description": "Write the release notes", "type": "Dev Complete" }
    ])
}

pub fn sprint_body(pod_name: &str, start: &str, end: &str) -> Value {
    json!({
        "podName": pod_name,
        "startDate": start,
        "endDate": end,
        "goals": three_goals(),
    })
}

/// Create a sprint through the API and return the response body
pub async fn create_sprint(app: &Router, pod_name: &str, start: &str, end: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        "/api/sprints",
        Some(sprint_body(pod_name, start, end)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json
}
