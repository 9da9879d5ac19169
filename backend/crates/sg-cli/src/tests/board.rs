use crate::tests::{date, instant, sprint};
use crate::{BoardView, ClientError};

use sg_core::{GoalEditMode, SprintDto, SprintPhase};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_fetched_sprints_when_board_built_then_cards_are_classified() {
    // Given
    let now = instant("2025-03-01T09:00:00Z");
    let sprints = vec![
        SprintDto::from(sprint("Alpha", "2025-01-01", "2025-01-15")),
        SprintDto::from(sprint("Bravo", "2025-02-25", "2025-03-10")),
        SprintDto::from(sprint("Charlie", "2025-04-01", "2025-04-14")),
    ];

    // When
    let board = BoardView::build(sprints, now).unwrap();

    // Then
    assert_that!(board.current_upcoming.len(), eq(2));
    assert_that!(board.past.len(), eq(1));

    let running = &board.current_upcoming[0];
    assert_that!(running.pod_name, eq("Bravo"));
    assert_that!(running.edit_mode, eq(GoalEditMode::StatusOnly));
    assert_that!(running.goal_count, eq(3));
    assert_that!(running.done_count, eq(1));
    assert_that!(running.achievement_percentage, eq(33));

    assert_that!(board.current_upcoming[1].edit_mode, eq(GoalEditMode::Full));
    assert_that!(board.past[0].phase, eq(SprintPhase::Past));
    assert_that!(board.past[0].edit_mode, eq(GoalEditMode::ReadOnly));
    assert_that!(board.past[0].end_date, eq(date("2025-01-15")));
}

#[test]
fn given_board_when_serialized_then_uses_wire_names() {
    let now = instant("2025-01-20T00:00:00Z");
    let board = BoardView::build(
        vec![SprintDto::from(sprint("Alpha", "2025-01-01", "2025-01-15"))],
        now,
    )
    .unwrap();

    let value = serde_json::to_value(&board).unwrap();

    assert_that!(value["currentUpcoming"], eq(&json!([])));
    let card = &value["past"][0];
    assert_that!(card["podName"], eq(&json!("Alpha")));
    assert_that!(card["startDate"], eq(&json!("2025-01-01")));
    assert_that!(card["goalCount"], eq(&json!(3)));
    assert_that!(card["achievementPercentage"], eq(&json!(33)));
    assert_that!(card["editMode"], eq(&json!("readOnly")));
    assert!(card["_id"].is_string());
}

#[test]
fn given_sprint_with_non_uuid_id_when_board_built_then_validation_error() {
    let mut dto = SprintDto::from(sprint("Alpha", "2025-01-01", "2025-01-15"));
    dto.id = "64b7f0c2e4b0a1a2b3c4d5e6".to_string();

    let result = BoardView::build(vec![dto], instant("2025-01-20T00:00:00Z"));

    assert!(matches!(result, Err(ClientError::Validation { .. })));
}

#[test]
fn given_no_sprints_when_board_built_then_both_columns_empty() {
    let board = BoardView::build(Vec::new(), instant("2025-01-20T00:00:00Z")).unwrap();

    assert!(board.current_upcoming.is_empty());
    assert!(board.past.is_empty());
}
