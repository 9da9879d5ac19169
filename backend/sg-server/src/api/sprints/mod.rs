pub mod create_sprint_request;
pub mod goals;
pub mod sprints;
pub mod update_goals_request;
