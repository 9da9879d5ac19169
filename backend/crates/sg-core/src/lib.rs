pub mod classification;
pub mod error;
pub mod models;
pub mod reconcile;
pub mod validation;

#[cfg(test)]
mod tests;

pub use classification::{
    achievement::achievement_percentage, goal_edit_mode::GoalEditMode, sprint_board::SprintBoard,
    sprint_phase::SprintPhase,
};
pub use error::{CoreError, FieldError, Result as CoreResult};
pub use models::goal::Goal;
pub use models::goal_dto::GoalDto;
pub use models::goal_status::GoalStatus;
pub use models::goal_type::GoalType;
pub use models::sprint::{Sprint, timestamp_now};
pub use models::sprint_dto::SprintDto;
pub use reconcile::reconcile_goals;
pub use validation::{
    field_errors::FieldErrors,
    goal_candidate::GoalCandidate,
    goal_draft::GoalDraft,
    goal_validator::validate_goals,
    parse_calendar_date, rules,
    sprint_candidate::SprintCandidate,
    sprint_draft::SprintDraft,
    sprint_validator::validate_new_sprint,
    validation_context::ValidationContext,
};
