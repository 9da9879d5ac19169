//! Local goal edits. Each edit starts from the sprint's current goals,
//! checks the sprint's edit mode, and returns the full validated list to
//! submit. Echoed ids let the server keep goal identity.

use crate::{CliClientResult, ClientError};

use sg_core::{
    GoalCandidate, GoalDraft, GoalDto, GoalStatus, GoalType, Sprint, ValidationContext,
    validate_goals,
};

use chrono::{DateTime, Utc};

fn echo_current(sprint: &Sprint) -> Vec<GoalCandidate> {
    sprint
        .goals
        .iter()
        .cloned()
        .map(|g| GoalCandidate::from(GoalDto::from(g)))
        .collect()
}

fn check_index(sprint: &Sprint, index: usize) -> CliClientResult<()> {
    if index >= sprint.goals.len() {
        return Err(ClientError::edit_not_allowed(format!(
            "goal index {} is out of range; sprint has {} goals",
            index,
            sprint.goals.len()
        )));
    }
    Ok(())
}

fn validated(candidates: &[GoalCandidate]) -> CliClientResult<Vec<GoalDraft>> {
    Ok(validate_goals(candidates, ValidationContext::Replace)?)
}

/// Change one goal's status. Refused once the sprint has ended.
pub fn set_status(
    sprint: &Sprint,
    index: usize,
    status: GoalStatus,
    now: DateTime<Utc>,
) -> CliClientResult<Vec<GoalDraft>> {
    if !sprint.edit_mode(now).allows_status_change() {
        return Err(ClientError::edit_not_allowed(
            "sprint has ended; goals are read-only",
        ));
    }
    check_index(sprint, index)?;

    let mut candidates = echo_current(sprint);
    candidates[index].status = Some(status.as_str().to_string());
    validated(&candidates)
}

/// Append a goal. Only before the sprint starts.
pub fn add_goal(
    sprint: &Sprint,
    description: &str,
    goal_type: GoalType,
    now: DateTime<Utc>,
) -> CliClientResult<Vec<GoalDraft>> {
    require_structural(sprint, now)?;

    let mut candidates = echo_current(sprint);
    candidates.push(GoalCandidate::new(description, goal_type.as_str()));
    validated(&candidates)
}

/// Drop a goal. Only before the sprint starts; the result must still hold
/// at least three goals.
pub fn remove_goal(
    sprint: &Sprint,
    index: usize,
    now: DateTime<Utc>,
) -> CliClientResult<Vec<GoalDraft>> {
    require_structural(sprint, now)?;
    check_index(sprint, index)?;

    let mut candidates = echo_current(sprint);
    candidates.remove(index);
    validated(&candidates)
}

/// Rewrite one goal's description and/or type. Only before the sprint starts.
pub fn edit_goal(
    sprint: &Sprint,
    index: usize,
    description: Option<&str>,
    goal_type: Option<GoalType>,
    now: DateTime<Utc>,
) -> CliClientResult<Vec<GoalDraft>> {
    require_structural(sprint, now)?;
    check_index(sprint, index)?;

    let mut candidates = echo_current(sprint);
    if let Some(description) = description {
        candidates[index].description = Some(description.to_string());
    }
    if let Some(goal_type) = goal_type {
        candidates[index].goal_type = Some(goal_type.as_str().to_string());
    }
    validated(&candidates)
}

/// Submit a whole list as given. Refused once the sprint has ended; while it
/// runs the list may differ from the stored one in statuses only.
pub fn replace_all(
    sprint: &Sprint,
    candidates: &[GoalCandidate],
    now: DateTime<Utc>,
) -> CliClientResult<Vec<GoalDraft>> {
    if sprint.is_past(now) {
        return Err(ClientError::edit_not_allowed(
            "sprint has ended; goals are read-only",
        ));
    }

    let drafts = validated(candidates)?;
    if !sprint.edit_mode(now).allows_structural_change() && !only_statuses_differ(sprint, &drafts)
    {
        return Err(ClientError::edit_not_allowed(
            "sprint has started; only goal statuses can change",
        ));
    }
    Ok(drafts)
}

/// Same goals by id, description and type, in the same order.
fn only_statuses_differ(sprint: &Sprint, drafts: &[GoalDraft]) -> bool {
    drafts.len() == sprint.goals.len()
        && drafts.iter().zip(&sprint.goals).all(|(draft, goal)| {
            draft.id == Some(goal.id)
                && draft.description == goal.description
                && draft.goal_type == goal.goal_type
        })
}

fn require_structural(sprint: &Sprint, now: DateTime<Utc>) -> CliClientResult<()> {
    if sprint.edit_mode(now).allows_structural_change() {
        Ok(())
    } else {
        Err(ClientError::edit_not_allowed(
            "sprint has started; only goal statuses can change",
        ))
    }
}
