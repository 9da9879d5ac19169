//! REST API error types
//!
//! Every variant renders as a flat JSON body with a machine-readable `code`
//! and a human-readable `message`, and is logged when turned into a response.

use sg_core::{CoreError, FieldError};
use sg_db::DbError;

use std::collections::BTreeMap;
use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Human-readable error message
    pub message: String,
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: &'static str,
    /// Per-field messages keyed by path, e.g. `goals[1].description`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
    /// Underlying cause of an unexpected failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// One or more input rules failed (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    /// Identifier in the path is not a valid id (400)
    #[error("Malformed id: {message} {location}")]
    MalformedId {
        message: String,
        location: ErrorLocation,
    },

    /// Request body could not be read as JSON (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message}: {error} {location}")]
    Internal {
        message: String,
        error: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn sprint_not_found(id: &str) -> Self {
        ApiError::NotFound {
            message: format!("Sprint {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. }
            | ApiError::MalformedId { .. }
            | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        if self.status().is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let status = self.status();
        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody {
                message,
                code: "NOT_FOUND",
                errors: None,
                error: None,
            },
            ApiError::Validation {
                message, errors, ..
            } => ApiErrorBody {
                message,
                code: "VALIDATION_ERROR",
                errors: (!errors.is_empty()).then(|| {
                    errors
                        .into_iter()
                        .map(|e| (e.field, e.message))
                        .collect()
                }),
                error: None,
            },
            ApiError::MalformedId { message, .. } => ApiErrorBody {
                message,
                code: "MALFORMED_ID",
                errors: None,
                error: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                message,
                code: "BAD_REQUEST",
                errors: None,
                error: None,
            },
            ApiError::Internal { message, error, .. } => ApiErrorBody {
                message,
                code: "INTERNAL_ERROR",
                errors: None,
                error: Some(error),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert domain errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation {
                message, errors, ..
            } => ApiError::Validation {
                message,
                errors,
                location,
            },
            CoreError::Uuid { field, source, .. } => ApiError::MalformedId {
                message: format!("Invalid {}: {}", field, source),
                location,
            },
            other @ (CoreError::InvalidGoalType { .. } | CoreError::InvalidGoalStatus { .. }) => {
                ApiError::Validation {
                    message: other.to_string(),
                    errors: Vec::new(),
                    location,
                }
            }
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let message = match &e {
            DbError::Sqlx { .. } => "Database operation failed",
            DbError::Migration { .. } => "Database migration error",
            DbError::Directory { .. } => "Database storage unavailable",
            DbError::CorruptRow { .. } => "Stored data could not be read",
        };

        ApiError::Internal {
            message: message.to_string(),
            error: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::MalformedId {
            message: format!("Invalid id format: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert body extraction failures to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
