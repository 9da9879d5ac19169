//! Sprint creation input as typed on the command line: optional dates with
//! defaults, goals paired with their types by position.

use crate::{CliClientResult, ClientError};

use sg_core::{
    FieldErrors, GoalCandidate, SprintCandidate, SprintDraft, parse_calendar_date,
    validate_new_sprint,
};

use chrono::{Duration, NaiveDate};

/// Default sprint length when no end date is given.
pub const DEFAULT_SPRINT_DAYS: i64 = 14;

#[derive(Debug, Clone, Default)]
pub struct NewSprintArgs {
    pub pod_name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub goals: Vec<String>,
    pub goal_types: Vec<String>,
}

impl NewSprintArgs {
    /// Fill in default dates, validate with the shared rules, and refuse a
    /// start date before `today`.
    pub fn into_draft(self, today: NaiveDate) -> CliClientResult<SprintDraft> {
        if self.goal_types.len() > self.goals.len() {
            return Err(ClientError::invalid_arguments(format!(
                "{} --goal-type values given for {} --goal values",
                self.goal_types.len(),
                self.goals.len()
            )));
        }

        let start_date = self
            .start_date
            .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
        let end_date = self.end_date.or_else(|| {
            parse_calendar_date(&start_date).map(|start| {
                (start + Duration::days(DEFAULT_SPRINT_DAYS))
                    .format("%Y-%m-%d")
                    .to_string()
            })
        });

        let mut goal_types = self.goal_types.into_iter();
        let candidate = SprintCandidate {
            pod_name: Some(self.pod_name),
            start_date: Some(start_date),
            end_date,
            goals: Some(
                self.goals
                    .into_iter()
                    .map(|description| GoalCandidate {
                        description: Some(description),
                        goal_type: goal_types.next(),
                        ..GoalCandidate::default()
                    })
                    .collect(),
            ),
        };

        let draft = validate_new_sprint(&candidate)?;
        if draft.start_date < today {
            let mut errors = FieldErrors::new();
            errors.push("startDate", "Start date cannot be in the past.");
            return Err(errors.into_error().into());
        }
        Ok(draft)
    }
}
