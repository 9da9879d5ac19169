use sg_config::ConfigError;
use sg_core::CoreError;

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while talking to the sprint goals API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error ({status}): {message} (code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        errors: BTreeMap<String, String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("{source}")]
    Validation {
        #[source]
        source: CoreError,
    },

    #[error("Edit not allowed: {message} {location}")]
    EditNotAllowed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid arguments: {message} {location}")]
    InvalidArguments {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn edit_not_allowed(message: impl Into<String>) -> Self {
        ClientError::EditNotAllowed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        ClientError::InvalidArguments {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field-level validation messages, whether raised locally or by the server.
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        match self {
            ClientError::Api { errors, .. } => errors.clone(),
            ClientError::Validation { source } => source
                .field_errors()
                .iter()
                .map(|e| (e.field.clone(), e.message.clone()))
                .collect(),
            _ => BTreeMap::new(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<CoreError> for ClientError {
    fn from(source: CoreError) -> Self {
        ClientError::Validation { source }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
