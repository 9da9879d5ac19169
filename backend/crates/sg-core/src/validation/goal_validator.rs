use crate::{
    CoreResult, FieldErrors, GoalCandidate, GoalDraft, GoalStatus, GoalType, ValidationContext,
    rules::{MIN_DESCRIPTION_LENGTH, MIN_GOAL_COUNT, goal_status_names, goal_type_names},
};

use std::str::FromStr;

use uuid::Uuid;

/// Validate and normalize a goal list.
///
/// Pure: the result is ready to be stored as the sprint's entire goal array.
pub fn validate_goals(
    candidates: &[GoalCandidate],
    context: ValidationContext,
) -> CoreResult<Vec<GoalDraft>> {
    let mut errors = FieldErrors::new();
    let drafts = collect_goal_drafts(candidates, context, &mut errors);
    errors.into_result()?;
    Ok(drafts)
}

/// Shared with the sprint validator so goal and sprint violations end up in
/// a single error.
pub(crate) fn collect_goal_drafts(
    candidates: &[GoalCandidate],
    context: ValidationContext,
    errors: &mut FieldErrors,
) -> Vec<GoalDraft> {
    let drafts = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| validate_goal(index, candidate, context, errors))
        .collect();

    if candidates.len() < MIN_GOAL_COUNT {
        errors.push(
            "goals",
            format!(
                "A sprint must have at least {} goals, got {}.",
                MIN_GOAL_COUNT,
                candidates.len()
            ),
        );
    }

    drafts
}

fn validate_goal(
    index: usize,
    candidate: &GoalCandidate,
    context: ValidationContext,
    errors: &mut FieldErrors,
) -> Option<GoalDraft> {
    let before = errors.len();
    let path = |field: &str| format!("goals[{index}].{field}");

    let id = match candidate.id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match Uuid::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(path("_id"), format!("Goal id '{raw}' is not a valid identifier."));
                None
            }
        },
    };

    let description = candidate
        .description
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if description.is_empty() {
        errors.push(path("description"), "Goal description is required.");
    } else if description.chars().count() < MIN_DESCRIPTION_LENGTH {
        errors.push(
            path("description"),
            format!("Goal description must be at least {MIN_DESCRIPTION_LENGTH} characters long."),
        );
    }

    let goal_type = match (candidate.goal_type.as_deref(), context) {
        (None, ValidationContext::Create) => Some(GoalType::default()),
        (Some(raw), _) => GoalType::from_str(raw).ok(),
        (None, ValidationContext::Replace) => None,
    };
    if goal_type.is_none() {
        errors.push(
            path("type"),
            format!("Goal type must be one of: {}.", goal_type_names()),
        );
    }

    let status = match candidate.status.as_deref() {
        None => Some(GoalStatus::default()),
        Some(raw) => GoalStatus::from_str(raw).ok(),
    };
    if status.is_none() {
        errors.push(
            path("status"),
            format!("Goal status must be one of: {}.", goal_status_names()),
        );
    }

    if errors.len() > before {
        return None;
    }

    Some(GoalDraft {
        id,
        description: description.to_string(),
        goal_type: goal_type?,
        status: status?,
    })
}
