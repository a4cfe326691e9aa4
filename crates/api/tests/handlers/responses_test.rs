use axum::http::StatusCode;
use courtside_core::models::{
    assignment::AssignmentResponse,
    participant::{ParticipantsResponse, SubmitResponseResponse},
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_submit_sign_up() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/responses")
        .json(&json!({
            "name": "  Minji  ",
            "attending": true,
            "slots": ["before", "after"],
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<SubmitResponseResponse>();
    assert_eq!(body.name, "Minji");
    assert!(body.attending);
    assert!(body.id.is_some());

    let participants = ctx
        .server
        .get("/api/participants")
        .await
        .json::<ParticipantsResponse>();
    assert_eq!(participants.before, vec!["Minji".to_string()]);
    assert_eq!(participants.after, vec!["Minji".to_string()]);
}

#[tokio::test]
async fn test_submit_absence_is_not_on_roster() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/responses")
        .json(&json!({
            "name": "Jun",
            "attending": false,
            "reason": "dentist",
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<SubmitResponseResponse>();
    assert!(!body.attending);
    assert_eq!(body.id, None);

    let participants = ctx
        .server
        .get("/api/participants")
        .await
        .json::<ParticipantsResponse>();
    assert!(participants.before.is_empty());
    assert!(participants.after.is_empty());
}

#[tokio::test]
async fn test_submit_blank_name_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/responses")
        .json(&json!({ "name": "   ", "attending": true, "slots": ["before"] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Validation error: name must not be empty"
    );
}

#[tokio::test]
async fn test_submit_unknown_slot_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/responses")
        .json(&json!({ "name": "Sora", "attending": true, "slots": ["midnight"] }))
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_participants_split_by_slot_in_sign_up_order() {
    let ctx = TestContext::new();
    ctx.sign_up("A", &["before"]).await;
    ctx.sign_up("B", &["after"]).await;
    ctx.sign_up("C", &["before", "after"]).await;

    let participants = ctx
        .server
        .get("/api/participants")
        .await
        .json::<ParticipantsResponse>();

    assert_eq!(participants.before, vec!["A", "C"]);
    assert_eq!(participants.after, vec!["B", "C"]);
}

#[tokio::test]
async fn test_assignment_is_null_before_assign() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/assignment").await;

    response.assert_status_ok();
    assert!(response.json::<AssignmentResponse>().assignment.is_none());
}
