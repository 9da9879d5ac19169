mod board;

use sg_core::{Goal, GoalStatus, GoalType, Sprint};

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

pub(crate) fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub(crate) fn instant(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

pub(crate) fn sprint(pod_name: &str, start: &str, end: &str) -> Sprint {
    let now = Utc::now();
    Sprint {
        id: Uuid::new_v4(),
        pod_name: pod_name.to_string(),
        start_date: date(start),
        end_date: date(end),
        goals: vec![
            Goal::new("Ship the login page".into(), GoalType::Live, GoalStatus::Done),
            Goal::new(
                "Harden the payments API".into(),
                GoalType::QaComplete,
                GoalStatus::NotDone,
            ),
            Goal::new(
                "Write the release notes".into(),
                GoalType::DevComplete,
                GoalStatus::NotDone,
            ),
        ],
        created_at: now,
        updated_at: now,
    }
}
