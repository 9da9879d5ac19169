use crate::{CreateSprintRequest, UpdateGoalsRequest};

use sg_core::SprintCandidate;

use serde_json::json;

#[test]
fn test_create_request_reads_camel_case_and_ignores_server_fields() {
    let body = json!({
        "_id": "client-made",
        "podName": "Phoenix",
        "startDate": "2025-01-01",
        "endDate": "2025-01-15T00:00:00.000Z",
        "createdAt": "2020-01-01T00:00:00Z",
        "goals": [{ "description": "Ship the login page", "type": "Live" }]
    });

    let req: CreateSprintRequest = serde_json::from_value(body).unwrap();
    let candidate = SprintCandidate::from(req);

    assert_eq!(candidate.pod_name.as_deref(), Some("Phoenix"));
    assert_eq!(candidate.end_date.as_deref(), Some("2025-01-15T00:00:00.000Z"));
    let goals = candidate.goals.unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].goal_type.as_deref(), Some("Live"));
}

#[test]
fn test_create_request_with_empty_body_has_no_fields() {
    let req: CreateSprintRequest = serde_json::from_value(json!({})).unwrap();

    let candidate = SprintCandidate::from(req);

    assert!(candidate.pod_name.is_none());
    assert!(candidate.goals.is_none());
}

#[test]
fn test_update_request_without_goals_is_empty_list() {
    let req: UpdateGoalsRequest = serde_json::from_value(json!({})).unwrap();

    assert!(req.into_candidates().is_empty());
}

#[test]
fn test_update_request_keeps_echoed_ids() {
    let req: UpdateGoalsRequest = serde_json::from_value(json!({
        "goals": [{
            "_id": "2b8f3c1e-4d5a-4f6b-9c7d-8e9f0a1b2c3d",
            "description": "Ship the login page",
            "type": "Live",
            "status": "Done"
        }]
    }))
    .unwrap();

    let goals = req.into_candidates();

    assert_eq!(
        goals[0].id.as_deref(),
        Some("2b8f3c1e-4d5a-4f6b-9c7d-8e9f0a1b2c3d")
    );
    assert_eq!(goals[0].status.as_deref(), Some("Done"));
}
