use crate::GoalCandidate;

/// Raw sprint creation input; every field may be missing.
#[derive(Debug, Clone, Default)]
pub struct SprintCandidate {
    pub pod_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub goals: Option<Vec<GoalCandidate>>,
}
