//! Terminal rendition of the sprint board: sprints split into
//! current/upcoming and past, each summarised as a card.

use crate::CliClientResult;

use sg_core::{GoalEditMode, Sprint, SprintBoard, SprintDto, SprintPhase};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SprintCard {
    #[serde(rename = "_id")]
    pub id: String,
    pub pod_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub goal_count: usize,
    pub done_count: usize,
    pub achievement_percentage: u8,
    pub phase: SprintPhase,
    pub edit_mode: GoalEditMode,
}

impl SprintCard {
    pub fn new(sprint: &Sprint, now: DateTime<Utc>) -> Self {
        Self {
            id: sprint.id.to_string(),
            pod_name: sprint.pod_name.clone(),
            start_date: sprint.start_date,
            end_date: sprint.end_date,
            goal_count: sprint.goals.len(),
            done_count: sprint.done_count(),
            achievement_percentage: sprint.achievement_percentage(),
            phase: sprint.phase(now),
            edit_mode: sprint.edit_mode(now),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub current_upcoming: Vec<SprintCard>,
    pub past: Vec<SprintCard>,
}

impl BoardView {
    /// Classify fetched sprints against `now`. Fails if the server sent an
    /// id that is not a UUID.
    pub fn build(sprints: Vec<SprintDto>, now: DateTime<Utc>) -> CliClientResult<Self> {
        let sprints = sprints
            .into_iter()
            .map(Sprint::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let board = SprintBoard::partition(sprints, now);

        Ok(Self {
            current_upcoming: board
                .current_upcoming
                .iter()
                .map(|s| SprintCard::new(s, now))
                .collect(),
            past: board.past.iter().map(|s| SprintCard::new(s, now)).collect(),
        })
    }
}
