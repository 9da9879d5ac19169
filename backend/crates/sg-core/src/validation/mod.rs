//! Input validation for sprints and goal lists.
//!
//! Validators never stop at the first violation: every broken rule is
//! recorded as a [`FieldError`](crate::FieldError) and the whole set is
//! returned in one [`CoreError::Validation`](crate::CoreError::Validation).

pub mod field_errors;
pub mod goal_candidate;
pub mod goal_draft;
pub mod goal_validator;
pub mod rules;
pub mod sprint_candidate;
pub mod sprint_draft;
pub mod sprint_validator;
pub mod validation_context;

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a calendar date sent by a client.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (browsers often send
/// `2025-01-01T00:00:00.000Z`); for timestamps the UTC date is used.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}
