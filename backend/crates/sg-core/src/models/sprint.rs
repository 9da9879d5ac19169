use crate::{
    CoreError, CoreResult, Goal, GoalDraft, SprintDraft, SprintDto, reconcile_goals,
};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sprint {
    pub id: Uuid,
    pub pod_name: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    pub goals: Vec<Goal>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sprint {
    /// Build a new sprint from a validated draft. Every goal gets a fresh id.
    pub fn new(draft: SprintDraft) -> Self {
        let now = timestamp_now();
        Self {
            id: Uuid::new_v4(),
            pod_name: draft.pod_name,
            start_date: draft.start_date,
            end_date: draft.end_date,
            goals: draft.goals.into_iter().map(GoalDraft::into_new_goal).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the whole goal array with `drafts`, keeping ids of goals that
    /// are echoed back or unchanged.
    pub fn replace_goals(&mut self, drafts: Vec<GoalDraft>, now: DateTime<Utc>) {
        self.goals = reconcile_goals(&self.goals, drafts);
        self.updated_at = now;
    }

    pub fn done_count(&self) -> usize {
        self.goals.iter().filter(|g| g.is_done()).count()
    }
}

/// Current time at the millisecond precision timestamps are stored with.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

impl TryFrom<SprintDto> for Sprint {
    type Error = CoreError;

    fn try_from(dto: SprintDto) -> CoreResult<Self> {
        let goals = dto
            .goals
            .into_iter()
            .map(Goal::try_from)
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Sprint {
            id: Uuid::parse_str(&dto.id).map_err(|source| CoreError::Uuid {
                field: "sprint._id".into(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?,
            pod_name: dto.pod_name,
            start_date: dto.start_date,
            end_date: dto.end_date,
            goals,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        })
    }
}
