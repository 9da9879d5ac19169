use sg_core::GoalCandidate;

use serde::Deserialize;

/// Request body for replacing a sprint's goal list
#[derive(Debug, Default, Deserialize)]
pub struct UpdateGoalsRequest {
    /// The complete new list; goals left out are removed.
    #[serde(default)]
    pub goals: Option<Vec<GoalCandidate>>,
}

impl UpdateGoalsRequest {
    pub fn into_candidates(self) -> Vec<GoalCandidate> {
        self.goals.unwrap_or_default()
    }
}
