use crate::tests::{date, goal, instant, sprint};
use crate::{
    GoalEditMode, GoalStatus, SprintBoard, SprintPhase, achievement_percentage,
    classification::{end_of_day, start_of_day},
};

use chrono::{Duration, Utc};
use googletest::prelude::*;

// =========================================================================
// Phase
// =========================================================================

#[test]
fn given_end_date_yesterday_when_classified_then_past() {
    let now = Utc::now();
    let mut s = sprint("Phoenix", "2020-01-01", "2020-01-02");
    s.end_date = (now - Duration::days(1)).date_naive();

    assert_that!(s.phase(now), eq(SprintPhase::Past));
}

#[test]
fn given_end_date_tomorrow_when_classified_then_current() {
    let now = Utc::now();
    let mut s = sprint("Phoenix", "2020-01-01", "2020-01-02");
    s.end_date = (now + Duration::days(1)).date_naive();

    assert_that!(s.phase(now), eq(SprintPhase::CurrentOrUpcoming));
}

#[test]
fn given_end_date_today_when_classified_then_current_until_midnight() {
    let s = sprint("Phoenix", "2025-01-01", "2025-01-15");

    assert_that!(
        s.phase(instant("2025-01-15T23:59:59.999Z")),
        eq(SprintPhase::CurrentOrUpcoming)
    );
    assert_that!(s.phase(instant("2025-01-16T00:00:00Z")), eq(SprintPhase::Past));
}

#[test]
fn test_day_boundaries() {
    assert_eq!(
        start_of_day(date("2025-01-15")),
        instant("2025-01-15T00:00:00Z")
    );
    assert_eq!(
        end_of_day(date("2025-01-15")),
        instant("2025-01-15T23:59:59.999Z")
    );
}

// =========================================================================
// Edit mode
// =========================================================================

#[test]
fn given_sprint_dates_when_edit_mode_computed_then_follows_lifecycle() {
    let s = sprint("Phoenix", "2025-01-10", "2025-01-20");

    assert_that!(
        s.edit_mode(instant("2025-01-09T12:00:00Z")),
        eq(GoalEditMode::Full)
    );
    assert_that!(
        s.edit_mode(instant("2025-01-10T00:00:00Z")),
        eq(GoalEditMode::StatusOnly)
    );
    assert_that!(
        s.edit_mode(instant("2025-01-20T18:00:00Z")),
        eq(GoalEditMode::StatusOnly)
    );
    assert_that!(
        s.edit_mode(instant("2025-01-21T00:00:01Z")),
        eq(GoalEditMode::ReadOnly)
    );
}

#[test]
fn test_edit_mode_permissions() {
    assert!(!GoalEditMode::ReadOnly.allows_status_change());
    assert!(GoalEditMode::StatusOnly.allows_status_change());
    assert!(!GoalEditMode::StatusOnly.allows_structural_change());
    assert!(GoalEditMode::Full.allows_structural_change());
}

// =========================================================================
// Achievement
// =========================================================================

#[test]
fn test_achievement_percentage_rounds_half_up() {
    let done = |n: usize, total: usize| {
        (0..total)
            .map(|i| {
                let status = if i < n {
                    GoalStatus::Done
                } else {
                    GoalStatus::NotDone
                };
                goal("Ship the login page", status)
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(achievement_percentage(&[]), 0);
    assert_eq!(achievement_percentage(&done(0, 3)), 0);
    assert_eq!(achievement_percentage(&done(1, 3)), 33);
    assert_eq!(achievement_percentage(&done(2, 3)), 67);
    assert_eq!(achievement_percentage(&done(1, 8)), 13); // 12.5
    assert_eq!(achievement_percentage(&done(3, 3)), 100);
}

#[test]
fn given_sprint_with_one_goal_done_when_achievement_computed_then_percentage() {
    let mut s = sprint("Phoenix", "2025-01-01", "2025-01-15");
    s.goals[0].status = GoalStatus::Done;

    assert_that!(s.achievement_percentage(), eq(33));
    assert_that!(s.done_count(), eq(1));
}

// =========================================================================
// Board
// =========================================================================

#[test]
fn given_mixed_sprints_when_partitioned_then_split_and_ordered() {
    // Given
    let now = instant("2025-03-01T09:00:00Z");
    let sprints = vec![
        sprint("Alpha", "2025-01-01", "2025-01-15"),
        sprint("Bravo", "2025-03-01", "2025-03-20"),
        sprint("Charlie", "2025-02-01", "2025-02-14"),
        sprint("Delta", "2025-02-20", "2025-03-05"),
        sprint("Echo", "2025-04-01", "2025-04-14"),
    ];

    // When
    let board = SprintBoard::partition(sprints, now);

    // Then
    let current: Vec<_> = board
        .current_upcoming
        .iter()
        .map(|s| s.pod_name.as_str())
        .collect();
    let past: Vec<_> = board.past.iter().map(|s| s.pod_name.as_str()).collect();

    assert_that!(current, eq(&vec!["Delta", "Bravo", "Echo"]));
    assert_that!(past, eq(&vec!["Charlie", "Alpha"]));
    assert_that!(board.len(), eq(5));
}

#[test]
fn given_same_end_date_when_partitioned_then_pod_name_then_latest_start() {
    let now = instant("2025-01-01T00:00:00Z");
    let sprints = vec![
        sprint("Bravo", "2025-01-02", "2025-01-20"),
        sprint("Alpha", "2025-01-05", "2025-01-20"),
        sprint("Alpha", "2025-01-08", "2025-01-20"),
    ];

    let board = SprintBoard::partition(sprints, now);

    let order: Vec<_> = board
        .current_upcoming
        .iter()
        .map(|s| (s.pod_name.as_str(), s.start_date))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Alpha", date("2025-01-08")),
            ("Alpha", date("2025-01-05")),
            ("Bravo", date("2025-01-02")),
        ]
    );
}

#[test]
fn given_no_sprints_when_partitioned_then_empty_board() {
    let board = SprintBoard::partition(Vec::new(), Utc::now());

    assert!(board.is_empty());
}
