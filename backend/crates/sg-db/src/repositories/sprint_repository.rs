use crate::Result as DbErrorResult;
use crate::repositories::rows::{DATE_FORMAT, GoalRow, SprintRow};

use sg_core::{Goal, Sprint};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::debug;
use sqlx::{Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

pub struct SprintRepository {
    pool: SqlitePool,
}

impl SprintRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the sprint and its goals in one transaction.
    pub async fn create(&self, sprint: &Sprint) -> DbErrorResult<()> {
        let id = sprint.id.to_string();
        let start_date = sprint.start_date.format(DATE_FORMAT).to_string();
        let end_date = sprint.end_date.format(DATE_FORMAT).to_string();
        let created_at = sprint.created_at.timestamp_millis();
        let updated_at = sprint.updated_at.timestamp_millis();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
                INSERT INTO sprints (id, pod_name, start_date, end_date, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&sprint.pod_name)
        .bind(&start_date)
        .bind(&end_date)
        .bind(created_at)
        .bind(updated_at)
        .execute(&mut *tx)
        .await?;

        insert_goals(&mut tx, &id, &sprint.goals).await?;

        tx.commit().await?;

        debug!("Created sprint {} with {} goals", id, sprint.goals.len());
        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Sprint>> {
        let id_str = id.to_string();

        let row = sqlx::query_as::<_, SprintRow>(
            r#"
                SELECT id, pod_name, start_date, end_date, created_at, updated_at
                FROM sprints
                WHERE id = ?
            "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let goals = self.find_goals(id).await?;
        row.into_sprint(goals).map(Some)
    }

    /// All sprints, most recent start date first.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Sprint>> {
        let rows = sqlx::query_as::<_, SprintRow>(
            r#"
                SELECT id, pod_name, start_date, end_date, created_at, updated_at
                FROM sprints
                ORDER BY start_date DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let goal_rows = sqlx::query_as::<_, GoalRow>(
            r#"
                SELECT id, sprint_id, description, goal_type, status
                FROM sprint_goals
                ORDER BY sprint_id, position
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut goals_by_sprint: HashMap<String, Vec<Goal>> = HashMap::new();
        for goal_row in goal_rows {
            let sprint_id = goal_row.sprint_id.clone();
            goals_by_sprint
                .entry(sprint_id)
                .or_default()
                .push(Goal::try_from(goal_row)?);
        }

        rows.into_iter()
            .map(|r| {
                let goals = goals_by_sprint.remove(&r.id).unwrap_or_default();
                r.into_sprint(goals)
            })
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Goals of one sprint in stored order. Empty when the sprint is unknown.
    pub async fn find_goals(&self, sprint_id: Uuid) -> DbErrorResult<Vec<Goal>> {
        let sprint_id_str = sprint_id.to_string();

        let rows = sqlx::query_as::<_, GoalRow>(
            r#"
                SELECT id, sprint_id, description, goal_type, status
                FROM sprint_goals
                WHERE sprint_id = ?
                ORDER BY position
            "#,
        )
        .bind(&sprint_id_str)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Goal::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Swap the sprint's whole goal list and bump `updated_at`, atomically.
    ///
    /// Returns `false` (and writes nothing) when the sprint does not exist.
    pub async fn replace_goals(
        &self,
        sprint_id: Uuid,
        goals: &[Goal],
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        let id = sprint_id.to_string();
        let updated_at = updated_at.timestamp_millis();

        let mut tx = self.pool.begin().await?;

        let touched = sqlx::query("UPDATE sprints SET updated_at = ? WHERE id = ?")
            .bind(updated_at)
            .bind(&id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if touched == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM sprint_goals WHERE sprint_id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await?;

        insert_goals(&mut tx, &id, goals).await?;

        tx.commit().await?;

        debug!("Replaced goals of sprint {} ({} goals)", id, goals.len());
        Ok(true)
    }

    /// Cheap connectivity probe used by readiness checks.
    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

async fn insert_goals(
    tx: &mut Transaction<'_, Sqlite>,
    sprint_id: &str,
    goals: &[Goal],
) -> DbErrorResult<()> {
    for (position, goal) in goals.iter().enumerate() {
        sqlx::query(
            r#"
                INSERT INTO sprint_goals (id, sprint_id, position, description, goal_type, status)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(goal.id.to_string())
        .bind(sprint_id)
        .bind(position as i64)
        .bind(&goal.description)
        .bind(goal.goal_type.as_str())
        .bind(goal.status.as_str())
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}
