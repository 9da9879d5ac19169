use crate::GoalDraft;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintDraft {
    pub pod_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub goals: Vec<GoalDraft>,
}
