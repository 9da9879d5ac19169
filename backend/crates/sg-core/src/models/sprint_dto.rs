use crate::{GoalDto, Sprint};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Sprint as it travels over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SprintDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub pod_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub goals: Vec<GoalDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Sprint> for SprintDto {
    fn from(s: Sprint) -> Self {
        Self {
            id: s.id.to_string(),
            pod_name: s.pod_name,
            start_date: s.start_date,
            end_date: s.end_date,
            goals: s.goals.into_iter().map(GoalDto::from).collect(),
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
