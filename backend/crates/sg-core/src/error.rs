use std::result::Result as StdResult;

use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// A single rule violation, keyed by the path of the offending field
/// (e.g. `podName`, `goals`, `goals[2].description`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    #[error("Invalid goal type: {value} {location}")]
    InvalidGoalType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid goal status: {value} {location}")]
    InvalidGoalStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error in {field}: {source} {location}")]
    Uuid {
        field: String,
        source: uuid::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field-level details carried by a validation error; empty for other variants.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            CoreError::Validation { errors, .. } => errors,
            _ => &[],
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
