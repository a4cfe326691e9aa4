use std::sync::Arc;

use axum::http::{StatusCode, header};
use chrono::Utc;
use courtside_api::handlers::admin::LoginRequest;
use courtside_core::{
    models::{
        assignment::{Assignment, AssignmentResponse, CourtId},
        participant::{AbsencesResponse, ParticipantRow, ParticipantsResponse, Slot},
    },
    store::memory::MemoryStore,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{TestContext, bearer};

#[tokio::test]
async fn test_login_with_wrong_password() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/admin/login")
        .json(&LoginRequest {
            password: "badminton".to_string(),
        })
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[rstest]
#[case("/api/admin/assign")]
#[case("/api/admin/reset")]
#[case("/api/admin/reload")]
#[case("/api/admin/logout")]
#[tokio::test]
async fn test_admin_posts_require_token(#[case] path: &str) {
    let ctx = TestContext::new();

    let response = ctx.server.post(path).await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[rstest]
#[case("/api/admin/absences")]
#[case("/api/admin/attendance.csv")]
#[tokio::test]
async fn test_admin_views_reject_unknown_token(#[case] path: &str) {
    let ctx = TestContext::new();
    let (name, value) = bearer(Uuid::new_v4());

    let response = ctx.server.get(path).add_header(name, value).await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_malformed_authorization_header() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get("/api/admin/absences")
        .add_header(header::AUTHORIZATION, "Basic abc".parse().unwrap())
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let ctx = TestContext::new();
    let token = ctx.login().await;

    let (name, value) = bearer(token);
    ctx.server
        .post("/api/admin/logout")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let (name, value) = bearer(token);
    ctx.server
        .get("/api/admin/absences")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_assign_teams_by_slot() {
    let ctx = TestContext::new();
    for name in ["A", "B", "C", "D", "E"] {
        ctx.sign_up(name, &["before"]).await;
    }
    ctx.sign_up("F", &["after"]).await;
    let token = ctx.login().await;

    let (name, value) = bearer(token);
    let response = ctx
        .server
        .post("/api/admin/assign")
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    let assignment = response.json::<Assignment>();
    let court = assignment.court(Slot::Before, CourtId(1)).unwrap();
    assert_eq!(court.team_1, vec!["A", "B"]);
    assert_eq!(court.team_2, vec!["C", "D"]);
    assert!(assignment.slots[&Slot::After].is_empty());

    let waitlisted: Vec<&str> = assignment
        .waitlist
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(waitlisted, vec!["E", "F"]);

    let current = ctx
        .server
        .get("/api/assignment")
        .await
        .json::<AssignmentResponse>();
    assert_eq!(current.assignment, Some(assignment));
}

#[tokio::test]
async fn test_assignment_wire_shape() {
    let ctx = TestContext::new();
    for name in ["A", "B", "C", "D"] {
        ctx.sign_up(name, &["after"]).await;
    }
    let token = ctx.login().await;
    let (name, value) = bearer(token);
    ctx.server
        .post("/api/admin/assign")
        .add_header(name, value)
        .await
        .assert_status_ok();

    let body = ctx.server.get("/api/assignment").await.json::<serde_json::Value>();

    assert_eq!(
        body["assignment"]["slots"]["after"]["court_1"],
        json!({ "TEAM_1": ["A", "B"], "TEAM_2": ["C", "D"] })
    );
}

#[tokio::test]
async fn test_absences_visible_to_admin() {
    let ctx = TestContext::new();
    ctx.server
        .post("/api/responses")
        .json(&json!({ "name": "Jun", "attending": false, "reason": "dentist" }))
        .await
        .assert_status(StatusCode::CREATED);
    let token = ctx.login().await;

    let (name, value) = bearer(token);
    let absences = ctx
        .server
        .get("/api/admin/absences")
        .add_header(name, value)
        .await
        .json::<AbsencesResponse>()
        .absences;

    assert_eq!(absences.len(), 1);
    assert_eq!(absences[0].name, "Jun");
    assert_eq!(absences[0].reason, "dentist");
}

#[tokio::test]
async fn test_export_attendance_csv() {
    let ctx = TestContext::new();
    ctx.server
        .post("/api/check-ins")
        .json(&json!({ "name": "Hana", "court": "court_2", "team": "TEAM_1", "slot": "after" }))
        .await
        .assert_status(StatusCode::CREATED);
    let token = ctx.login().await;

    let (name, value) = bearer(token);
    let response = ctx
        .server
        .get("/api/admin/attendance.csv")
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        "text/csv; charset=utf-8"
    );
    let text = response.text();
    let mut lines = text.trim_start_matches('\u{feff}').lines();
    assert!(text.starts_with('\u{feff}'));
    assert_eq!(lines.next(), Some("name,court,team,time_slot,timestamp"));
    let row = lines.next().unwrap();
    assert!(row.starts_with("Hana,court_2,TEAM_1,after,"));
    assert_eq!(lines.next(), None);
}

#[tokio::test]
async fn test_reset_clears_working_state_but_keeps_store() {
    let ctx = TestContext::new();
    ctx.sign_up("A", &["before"]).await;
    let token = ctx.login().await;

    let (name, value) = bearer(token);
    ctx.server
        .post("/api/admin/reset")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let participants = ctx
        .server
        .get("/api/participants")
        .await
        .json::<ParticipantsResponse>();
    assert_eq!(participants, ParticipantsResponse::default());

    // The stored row comes back once the working copy is reloaded.
    let (name, value) = bearer(token);
    ctx.server
        .post("/api/admin/reload")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let participants = ctx
        .server
        .get("/api/participants")
        .await
        .json::<ParticipantsResponse>();
    assert_eq!(participants.before, vec!["A"]);
}

#[tokio::test]
async fn test_roster_seeded_from_existing_rows() {
    let store = Arc::new(MemoryStore::with_rows(
        vec![ParticipantRow {
            id: Uuid::new_v4(),
            name: "Kai".to_string(),
            slots: "before, after".to_string(),
            submitted_at: Utc::now(),
        }],
        Vec::new(),
        Vec::new(),
    ));
    let ctx = TestContext::with_store(store);

    let participants = ctx
        .server
        .get("/api/participants")
        .await
        .json::<ParticipantsResponse>();

    assert_eq!(participants.before, vec!["Kai"]);
    assert_eq!(participants.after, vec!["Kai"]);
}
