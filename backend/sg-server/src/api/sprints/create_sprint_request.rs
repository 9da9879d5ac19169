use sg_core::{GoalCandidate, SprintCandidate};

use serde::Deserialize;

/// Request body for creating a sprint.
///
/// Every field is optional here so that missing values surface as field
/// errors instead of a body rejection. Server-owned fields such as `_id` or
/// `createdAt` are ignored if sent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSprintRequest {
    #[serde(default)]
    pub pod_name: Option<String>,

    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    #[serde(default)]
    pub start_date: Option<String>,

    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub goals: Option<Vec<GoalCandidate>>,
}

impl From<CreateSprintRequest> for SprintCandidate {
    fn from(req: CreateSprintRequest) -> Self {
        Self {
            pod_name: req.pod_name,
            start_date: req.start_date,
            end_date: req.end_date,
            goals: req.goals,
        }
    }
}
