use crate::{DbError, Result as DbErrorResult};

use sg_core::{Goal, GoalStatus, GoalType, Sprint};

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct SprintRow {
    pub id: String,
    pub pod_name: String,
    pub start_date: String,
    pub end_date: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct GoalRow {
    pub id: String,
    pub sprint_id: String,
    pub description: String,
    pub goal_type: String,
    pub status: String,
}

impl SprintRow {
    pub fn into_sprint(self, goals: Vec<Goal>) -> DbErrorResult<Sprint> {
        Ok(Sprint {
            id: parse_uuid(&self.id, "sprint.id")?,
            pod_name: self.pod_name,
            start_date: parse_date(&self.start_date, "sprint.start_date")?,
            end_date: parse_date(&self.end_date, "sprint.end_date")?,
            goals,
            created_at: parse_millis(self.created_at, "sprint.created_at")?,
            updated_at: parse_millis(self.updated_at, "sprint.updated_at")?,
        })
    }
}

impl TryFrom<GoalRow> for Goal {
    type Error = DbError;

    fn try_from(r: GoalRow) -> DbErrorResult<Self> {
        Ok(Goal {
            id: parse_uuid(&r.id, "goal.id")?,
            description: r.description,
            goal_type: GoalType::from_str(&r.goal_type).map_err(|e| {
                DbError::corrupt_row(format!("Invalid GoalType in goal.goal_type: {}", e))
            })?,
            status: GoalStatus::from_str(&r.status).map_err(|e| {
                DbError::corrupt_row(format!("Invalid GoalStatus in goal.status: {}", e))
            })?,
        })
    }
}

#[track_caller]
fn parse_uuid(raw: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|e| DbError::corrupt_row(format!("Invalid UUID in {}: {}", column, e)))
}

#[track_caller]
fn parse_date(raw: &str, column: &str) -> DbErrorResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| DbError::corrupt_row(format!("Invalid date in {}: {}", column, e)))
}

#[track_caller]
fn parse_millis(ms: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| DbError::corrupt_row(format!("Invalid timestamp in {}", column)))
}
