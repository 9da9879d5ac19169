use crate::{GoalDraft, GoalStatus, GoalType};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    pub id: Uuid,
    pub description: String,
    pub goal_type: GoalType,
    pub status: GoalStatus,
}

impl Goal {
    pub fn new(description: String, goal_type: GoalType, status: GoalStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            goal_type,
            status,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == GoalStatus::Done
    }

    /// True when description, type and status all match the draft.
    pub fn has_same_content(&self, draft: &GoalDraft) -> bool {
        self.description == draft.description
            && self.goal_type == draft.goal_type
            && self.status == draft.status
    }
}
