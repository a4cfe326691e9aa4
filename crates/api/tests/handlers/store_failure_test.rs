use std::sync::Arc;

use axum::http::StatusCode;
use courtside_core::{
    Stores,
    models::participant::ParticipantsResponse,
};
use courtside_db::mock::repositories::{MockAbsences, MockAttendance, MockRoster};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::server_for;

fn empty_absences() -> MockAbsences {
    let mut absences = MockAbsences::new();
    absences.expect_read_all_absences().returning(|| Ok(Vec::new()));
    absences
}

fn empty_attendance() -> MockAttendance {
    let mut attendance = MockAttendance::new();
    attendance
        .expect_read_all_attendance()
        .returning(|| Ok(Vec::new()));
    attendance
}

#[test_log::test(tokio::test)]
async fn test_failed_append_leaves_roster_unchanged() {
    let mut roster = MockRoster::new();
    roster
        .expect_read_all_participants()
        .times(1)
        .returning(|| Ok(Vec::new()));
    roster
        .expect_append_participant()
        .times(1)
        .returning(|_| Err(eyre::eyre!("sheet quota exceeded")));

    let (_, server) = server_for(Stores {
        roster: Arc::new(roster),
        absences: Arc::new(empty_absences()),
        attendance: Arc::new(empty_attendance()),
    });

    let response = server
        .post("/api/responses")
        .json(&json!({ "name": "Minji", "attending": true, "slots": ["before"] }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Store error: sheet quota exceeded"
    );

    let participants = server
        .get("/api/participants")
        .await
        .json::<ParticipantsResponse>();
    assert_eq!(participants, ParticipantsResponse::default());
}

#[tokio::test]
async fn test_failed_seed_read_reports_store_error() {
    let mut roster = MockRoster::new();
    roster
        .expect_read_all_participants()
        .returning(|| Err(eyre::eyre!("network unreachable")));

    let (_, server) = server_for(Stores {
        roster: Arc::new(roster),
        absences: Arc::new(empty_absences()),
        attendance: Arc::new(empty_attendance()),
    });

    let response = server.get("/api/participants").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_check_in_writes_through_once() {
    let mut attendance = MockAttendance::new();
    attendance
        .expect_read_all_attendance()
        .times(1)
        .returning(|| Ok(Vec::new()));
    attendance
        .expect_append_attendance()
        .withf(|row| row.name == "Hana" && row.court == "court_1" && row.team == "TEAM_1")
        .times(1)
        .returning(|_| Ok(()));

    let (_, server) = server_for(Stores {
        roster: Arc::new(MockRoster::new()),
        absences: Arc::new(empty_absences()),
        attendance: Arc::new(attendance),
    });

    let body = json!({ "name": "Hana", "court": "court_1", "team": "TEAM_1", "slot": "before" });
    server
        .post("/api/check-ins")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/api/check-ins")
        .json(&body)
        .await
        .assert_status(StatusCode::CONFLICT);
}
