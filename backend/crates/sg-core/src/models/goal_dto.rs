use crate::{CoreError, CoreResult, Goal, GoalCandidate, GoalStatus, GoalType};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Goal as it travels over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub description: String,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub status: GoalStatus,
}

impl From<Goal> for GoalDto {
    fn from(g: Goal) -> Self {
        Self {
            id: g.id.to_string(),
            description: g.description,
            goal_type: g.goal_type,
            status: g.status,
        }
    }
}

impl TryFrom<GoalDto> for Goal {
    type Error = CoreError;

    fn try_from(dto: GoalDto) -> CoreResult<Self> {
        Ok(Goal {
            id: Uuid::parse_str(&dto.id).map_err(|source| CoreError::Uuid {
                field: "goal._id".into(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?,
            description: dto.description,
            goal_type: dto.goal_type,
            status: dto.status,
        })
    }
}

/// Echo a stored goal back as an edit candidate, keeping its id.
impl From<GoalDto> for GoalCandidate {
    fn from(dto: GoalDto) -> Self {
        Self {
            id: Some(dto.id),
            description: Some(dto.description),
            goal_type: Some(dto.goal_type.as_str().to_string()),
            status: Some(dto.status.as_str().to_string()),
        }
    }
}
