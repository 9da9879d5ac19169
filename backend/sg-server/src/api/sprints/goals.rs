//! Goal list handlers. The list is always read and written as a whole.

use crate::{ApiError, ApiResult, AppState, UpdateGoalsRequest};

use sg_core::{GoalDto, SprintDto, ValidationContext, timestamp_now, validate_goals};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use log::info;
use uuid::Uuid;

/// GET /api/sprints/{id}/goals
pub async fn list_goals(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<GoalDto>>> {
    let sprint_id = Uuid::parse_str(&id)?;

    let sprint = state
        .sprints()
        .find_by_id(sprint_id)
        .await?
        .ok_or_else(|| ApiError::sprint_not_found(&id))?;

    Ok(Json(sprint.goals.into_iter().map(GoalDto::from).collect()))
}

/// PUT /api/sprints/{id}/goals
///
/// Replace the goal list wholesale. Nothing is written unless every goal
/// passes validation.
pub async fn replace_goals(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateGoalsRequest>, JsonRejection>,
) -> ApiResult<Json<SprintDto>> {
    let sprint_id = Uuid::parse_str(&id)?;
    let Json(req) = payload?;

    let repo = state.sprints();
    let mut sprint = repo
        .find_by_id(sprint_id)
        .await?
        .ok_or_else(|| ApiError::sprint_not_found(&id))?;

    let drafts = validate_goals(&req.into_candidates(), ValidationContext::Replace)?;
    sprint.replace_goals(drafts, timestamp_now());

    if !repo
        .replace_goals(sprint.id, &sprint.goals, sprint.updated_at)
        .await?
    {
        return Err(ApiError::sprint_not_found(&id));
    }

    info!(
        "Replaced goals of sprint {} ({} goals, {} done)",
        sprint.id,
        sprint.goals.len(),
        sprint.done_count()
    );

    Ok(Json(sprint.into()))
}
