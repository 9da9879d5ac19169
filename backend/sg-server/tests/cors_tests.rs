//! CORS behaviour of the router
mod common;

use crate::common::create_test_app_state;

use sg_config::CorsConfig;
use sg_server::build_router;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use tower::ServiceExt;

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/sprints")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_default_config_allows_any_origin() {
    let state = create_test_app_state().await;
    let app = build_router(state, &CorsConfig::default());

    let response = app.oneshot(preflight("http://anywhere.example")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_explicit_origins_echo_listed_origin_only() {
    let state = create_test_app_state().await;
    let cors = CorsConfig {
        allowed_origins: vec!["http://localhost:5173".to_string()],
    };
    let app = build_router(state, &cors);

    let allowed = app
        .clone()
        .oneshot(preflight("http://localhost:5173"))
        .await
        .unwrap();
    let denied = app.oneshot(preflight("http://evil.example")).await.unwrap();

    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );
    assert!(
        denied
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
