use crate::{
    AppState, create_sprint, get_sprint, health, list_goals, list_sprints, replace_goals,
};

use sg_config::CorsConfig;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use log::warn;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/", get(health::root))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Sprint API
        .route("/api/sprints", get(list_sprints).post(create_sprint))
        .route("/api/sprints/{id}", get(get_sprint))
        .route("/api/sprints/{id}/goals", get(list_goals).put(replace_goals))
        .with_state(state)
        .layer(cors_layer(cors))
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    if cors.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    // Credentials are only allowed alongside an explicit origin list
    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}
