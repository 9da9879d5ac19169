use crate::{Goal, GoalStatus, GoalType};

use uuid::Uuid;

/// A goal that passed validation: trimmed, defaulted, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDraft {
    /// Identifier echoed back by the client, if any.
    pub id: Option<Uuid>,
    pub description: String,
    pub goal_type: GoalType,
    pub status: GoalStatus,
}

impl GoalDraft {
    pub fn into_goal(self, id: Uuid) -> Goal {
        Goal {
            id,
            description: self.description,
            goal_type: self.goal_type,
            status: self.status,
        }
    }

    /// Ignore any echoed id and mint a fresh one.
    pub fn into_new_goal(self) -> Goal {
        Goal::new(self.description, self.goal_type, self.status)
    }
}
