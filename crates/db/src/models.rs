use chrono::{DateTime, Utc};
use courtside_core::models::{
    attendance::AttendanceRow,
    participant::{AbsenceRow, ParticipantRow},
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbParticipant {
    pub id: Uuid,
    pub name: String,
    pub slots: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAbsence {
    pub id: Uuid,
    pub name: String,
    pub reason: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAttendance {
    pub id: Uuid,
    pub name: String,
    pub court: String,
    pub team: String,
    pub time_slot: String,
    pub checked_in_at: DateTime<Utc>,
}

impl From<DbParticipant> for ParticipantRow {
    fn from(row: DbParticipant) -> Self {
        Self {
            id: row.id,
            name: row.name,
            slots: row.slots,
            submitted_at: row.submitted_at,
        }
    }
}

impl From<DbAbsence> for AbsenceRow {
    fn from(row: DbAbsence) -> Self {
        Self {
            name: row.name,
            reason: row.reason,
            submitted_at: row.submitted_at,
        }
    }
}

impl From<DbAttendance> for AttendanceRow {
    fn from(row: DbAttendance) -> Self {
        Self {
            name: row.name,
            court: row.court,
            team: row.team,
            slot: row.time_slot,
            checked_in_at: row.checked_in_at,
        }
    }
}
