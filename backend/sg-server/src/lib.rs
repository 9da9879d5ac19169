pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    sprints::{
        create_sprint_request::CreateSprintRequest,
        goals::{list_goals, replace_goals},
        sprints::{create_sprint, get_sprint, list_sprints},
        update_goals_request::UpdateGoalsRequest,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
