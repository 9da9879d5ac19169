//! Constants shared by the server and the CLI so both sides enforce the
//! same limits.

use crate::{GoalStatus, GoalType};

/// Minimum goal description length, counted after trimming.
pub const MIN_DESCRIPTION_LENGTH: usize = 12;

/// Minimum number of goals a sprint must carry at creation and on save.
pub const MIN_GOAL_COUNT: usize = 3;

pub const GOAL_TYPES: [GoalType; 3] = GoalType::ALL;

pub const GOAL_STATUSES: [GoalStatus; 2] = GoalStatus::ALL;

/// Human-readable list of the accepted goal types, e.g. for error messages.
pub fn goal_type_names() -> String {
    GOAL_TYPES
        .iter()
        .map(GoalType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn goal_status_names() -> String {
    GOAL_STATUSES
        .iter()
        .map(GoalStatus::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
