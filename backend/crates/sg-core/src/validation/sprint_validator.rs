use crate::{
    CoreResult, FieldErrors, SprintCandidate, SprintDraft, ValidationContext,
    validation::{goal_validator::collect_goal_drafts, parse_calendar_date},
};

use chrono::NaiveDate;

/// Validate a sprint creation request: POD name, date range and the initial
/// goal list. All violations are reported together.
pub fn validate_new_sprint(candidate: &SprintCandidate) -> CoreResult<SprintDraft> {
    let mut errors = FieldErrors::new();

    let pod_name = candidate
        .pod_name
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if pod_name.is_empty() {
        errors.push("podName", "POD name is required.");
    }

    let start_date = required_date(
        candidate.start_date.as_deref(),
        "startDate",
        "Start date",
        &mut errors,
    );
    let end_date = required_date(
        candidate.end_date.as_deref(),
        "endDate",
        "End date",
        &mut errors,
    );

    if let (Some(start), Some(end)) = (start_date, end_date)
        && end <= start
    {
        errors.push("endDate", "End date must be after start date.");
    }

    let goals = collect_goal_drafts(
        candidate.goals.as_deref().unwrap_or_default(),
        ValidationContext::Create,
        &mut errors,
    );

    let (Some(start_date), Some(end_date)) = (start_date, end_date) else {
        return Err(errors.into_error());
    };
    errors.into_result()?;

    Ok(SprintDraft {
        pod_name: pod_name.to_string(),
        start_date,
        end_date,
        goals,
    })
}

fn required_date(
    raw: Option<&str>,
    field: &str,
    label: &str,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    match raw.map(str::trim) {
        None | Some("") => {
            errors.push(field, format!("{label} is required."));
            None
        }
        Some(value) => {
            let parsed = parse_calendar_date(value);
            if parsed.is_none() {
                errors.push(
                    field,
                    format!("{label} '{value}' is not a valid date (expected YYYY-MM-DD)."),
                );
            }
            parsed
        }
    }
}
