mod classification;

use crate::{Goal, GoalCandidate, GoalStatus, GoalType, Sprint};

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

pub(crate) fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub(crate) fn instant(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

pub(crate) fn goal(description: &str, status: GoalStatus) -> Goal {
    Goal {
        id: Uuid::new_v4(),
        description: description.to_string(),
        goal_type: GoalType::DevComplete,
        status,
    }
}

pub(crate) fn sprint(pod_name: &str, start: &str, end: &str) -> Sprint {
    let now = Utc::now();
    Sprint {
        id: Uuid::new_v4(),
        pod_name: pod_name.to_string(),
        start_date: date(start),
        end_date: date(end),
        goals: vec![
            goal("Ship the login page", GoalStatus::NotDone),
            goal("Harden the payments API", GoalStatus::NotDone),
            goal("Write the release notes", GoalStatus::NotDone),
        ],
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn valid_candidates() -> Vec<GoalCandidate> {
    vec![
        GoalCandidate::new("Ship the login page", "Live"),
        GoalCandidate::new("Harden the payments API", "QA Complete"),
        GoalCandidate::new("Write the release notes", "Dev Complete"),
    ]
}
