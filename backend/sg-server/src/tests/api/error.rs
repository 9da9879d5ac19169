use crate::ApiError;

use sg_core::{FieldError, SprintCandidate, validate_new_sprint};
use sg_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use serde_json::Value;

async fn body_json(error: ApiError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Sprint abc not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Sprint abc not found");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field_map() {
    let error = ApiError::Validation {
        message: "Goal description is required.".into(),
        errors: vec![
            FieldError {
                field: "goals[0].description".into(),
                message: "Goal description is required.".into(),
            },
            FieldError {
                field: "goals".into(),
                message: "A sprint must have at least 3 goals, got 1.".into(),
            },
        ],
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "Goal description is required.");
    assert_eq!(
        json["errors"]["goals[0].description"],
        "Goal description is required."
    );
    assert_eq!(
        json["errors"]["goals"],
        "A sprint must have at least 3 goals, got 1."
    );
}

#[tokio::test]
async fn test_validation_error_without_fields_omits_map() {
    let error = ApiError::Validation {
        message: "Invalid goal type".into(),
        errors: Vec::new(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (_, json) = body_json(error).await;

    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn test_internal_error_returns_500_with_cause() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        error: "disk I/O error".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "disk I/O error");
}

#[test]
fn test_uuid_error_converts_to_malformed_id() {
    let uuid_err = uuid::Uuid::parse_str("64b7f0c2e4b0a1a2b3c4d5e6").unwrap_err();

    let api_err: ApiError = uuid_err.into();

    assert!(matches!(api_err, ApiError::MalformedId { .. }));
    assert_eq!(api_err.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_core_validation_error_keeps_field_errors() {
    let core_err = validate_new_sprint(&SprintCandidate::default()).unwrap_err();
    let expected = core_err.field_errors().to_vec();

    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { errors, .. } => assert_eq!(errors, expected),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_db_error_converts_to_internal() {
    let db_err = DbError::CorruptRow {
        message: "unknown goal type 'Shipped'".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::Internal { message, error, .. } => {
            assert_eq!(message, "Stored data could not be read");
            assert!(error.contains("Shipped"));
        }
        other => panic!("expected internal error, got {other:?}"),
    }
}
