//! Sprint REST API handlers

use crate::{ApiError, ApiResult, AppState, CreateSprintRequest};

use sg_core::{Sprint, SprintCandidate, SprintDto, validate_new_sprint};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use log::info;
use uuid::Uuid;

/// GET /api/sprints
///
/// All sprints, most recent start date first
pub async fn list_sprints(State(state): State<AppState>) -> ApiResult<Json<Vec<SprintDto>>> {
    let sprints = state.sprints().find_all().await?;

    Ok(Json(sprints.into_iter().map(SprintDto::from).collect()))
}

/// GET /api/sprints/{id}
pub async fn get_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SprintDto>> {
    let sprint_id = Uuid::parse_str(&id)?;

    let sprint = state
        .sprints()
        .find_by_id(sprint_id)
        .await?
        .ok_or_else(|| ApiError::sprint_not_found(&id))?;

    Ok(Json(sprint.into()))
}

/// POST /api/sprints
///
/// Validate and store a new sprint with its initial goals
pub async fn create_sprint(
    State(state): State<AppState>,
    payload: Result<Json<CreateSprintRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SprintDto>)> {
    let Json(req) = payload?;

    let draft = validate_new_sprint(&SprintCandidate::from(req))?;
    let sprint = Sprint::new(draft);

    state.sprints().create(&sprint).await?;

    info!(
        "Created sprint {} for POD '{}' ({} goals)",
        sprint.id,
        sprint.pod_name,
        sprint.goals.len()
    );

    Ok((StatusCode::CREATED, Json(sprint.into())))
}
