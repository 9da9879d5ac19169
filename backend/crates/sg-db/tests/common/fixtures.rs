#![allow(dead_code)]

use sg_core::{Goal, GoalStatus, GoalType, Sprint, timestamp_now};

use chrono::NaiveDate;
use uuid::Uuid;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Creates a test Goal
pub fn create_test_goal(description: &str, goal_type: GoalType) -> Goal {
    Goal::new(description.to_string(), goal_type, GoalStatus::NotDone)
}

/// Creates a test Sprint with three goals
pub fn create_test_sprint(pod_name: &str, start: &str, end: &str) -> Sprint {
    let now = timestamp_now();
    Sprint {
        id: Uuid::new_v4(),
        pod_name: pod_name.to_string(),
        start_date: date(start),
        end_date: date(end),
        goals: vec![
            create_test_goal("Ship the login page", GoalType::Live),
            create_test_goal("Harden the payments API", GoalType::QaComplete),
            create_test_goal("Write the release notes", GoalType::DevComplete),
        ],
        created_at: now,
        updated_at: now,
    }
}
