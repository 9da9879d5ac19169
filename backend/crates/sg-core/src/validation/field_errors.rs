use crate::{CoreError, CoreResult, FieldError};

use std::panic::Location;

use error_location::ErrorLocation;

/// Accumulates rule violations while a validator walks its input.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` when nothing was recorded, otherwise a validation error whose
    /// message is the first violation's message.
    #[track_caller]
    pub fn into_result(self) -> CoreResult<()> {
        if self.errors.is_empty() {
            return Ok(());
        }
        Err(self.into_error())
    }

    #[track_caller]
    pub fn into_error(self) -> CoreError {
        let message = self
            .errors
            .first()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "Validation failed.".to_string());

        CoreError::Validation {
            message,
            errors: self.errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
